//! HTTP API Client
//!
//! Communication with the FinBoard data provider.

pub mod client;

pub use client::{fetch_dashboard, get_api_base, FetchError};
