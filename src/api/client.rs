//! HTTP API Client
//!
//! Functions for fetching the dashboard snapshot from the FinBoard API.

use gloo_net::http::Request;

use crate::state::global::Snapshot;

/// Default API base URL (same origin)
pub const DEFAULT_API_BASE: &str = "/api";

/// Fetch failure kinds. All of them are logged only; none is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport failure before a response arrived
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not valid snapshot JSON
    #[error("parse error: {0}")]
    Parse(String),
    /// The provider flagged an error, either via status or an `error` field
    #[error("api error: {0}")]
    Api(String),
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: String,
    #[serde(default)]
    #[allow(dead_code)]
    code: Option<String>,
}

/// The raw dashboard payload: a snapshot, or an error flag alongside one
#[derive(Debug, serde::Deserialize)]
struct DashboardPayload {
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    snapshot: Snapshot,
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("finboard_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Fetch the dashboard snapshot.
///
/// One best-effort GET per page load: no retries, no timeout, no
/// cancellation.
pub async fn fetch_dashboard() -> Result<Snapshot, FetchError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/dashboard", api_base))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(FetchError::Api(error.error));
    }

    let payload: DashboardPayload = response
        .json()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))?;

    // An error field inside an otherwise-valid payload is still an error
    if let Some(error) = payload.error {
        return Err(FetchError::Api(error));
    }

    Ok(payload.snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_with_error_field() {
        let payload: DashboardPayload = serde_json::from_str(r#"{"error": "Unauthorized"}"#).unwrap();

        assert_eq!(payload.error.as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn test_payload_without_error_field() {
        let payload: DashboardPayload =
            serde_json::from_str(r#"{"income": 500.0, "expense": 200.0, "balance": 300.0}"#)
                .unwrap();

        assert!(payload.error.is_none());
        assert_eq!(payload.snapshot.balance, 300.0);
    }
}
