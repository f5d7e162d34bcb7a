//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the dashboard
//! snapshot types received from the API.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The snapshot for the current render pass, `None` until fetched
    pub snapshot: RwSignal<Option<Snapshot>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
}

/// The dashboard snapshot: one pre-aggregated payload per page load.
///
/// Immutable once received; every section renders from this value.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Snapshot {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
    pub transactions: Vec<Transaction>,
    pub categories: Vec<CategoryTotal>,
    pub monthly: Vec<MonthlyTotal>,
    pub bills: Option<BillsSummary>,
    pub goals: Vec<Goal>,
}

/// A single transaction row from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Transaction {
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    /// Calendar date as sent by the provider, e.g. "2024-03-15"
    pub date: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxKind,
}

/// Transaction direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

/// Summed expense total for one category
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Income and expense totals for one month ("YYYY-MM"), newest first
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct MonthlyTotal {
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

/// Bill statistics plus the next few upcoming bills
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct BillsSummary {
    pub pending_count: u32,
    pub overdue_count: u32,
    pub due_soon_count: u32,
    pub pending_amount: f64,
    pub upcoming: Vec<UpcomingBill>,
}

/// One unpaid bill surfaced on the dashboard
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UpcomingBill {
    pub name: String,
    pub category: String,
    /// Due date as sent by the provider, e.g. "2024-04-01"
    pub due_date: String,
    pub amount: f64,
}

/// A savings goal with provider-computed progress percentage
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Goal {
    pub name: String,
    pub current_amount: f64,
    pub target_amount: f64,
    pub percentage: f64,
    #[serde(default)]
    pub deadline: Option<String>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        snapshot: create_rw_signal(None),
        loading: create_rw_signal(false),
    };

    provide_context(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_defaults_missing_sections() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"income": 100.0, "expense": 40.0, "balance": 60.0}"#)
                .unwrap();

        assert_eq!(snapshot.income, 100.0);
        assert!(snapshot.transactions.is_empty());
        assert!(snapshot.bills.is_none());
        assert!(snapshot.goals.is_empty());
    }

    #[test]
    fn test_transaction_type_is_lowercase() {
        let tx: Transaction = serde_json::from_str(
            r#"{"category": "Salary", "date": "2024-03-01", "amount": 5000.0, "type": "income"}"#,
        )
        .unwrap();

        assert_eq!(tx.kind, TxKind::Income);
        assert!(tx.description.is_none());
    }

    #[test]
    fn test_bills_summary_defaults_missing_stats() {
        let bills: BillsSummary = serde_json::from_str(r#"{"upcoming": []}"#).unwrap();

        assert_eq!(bills.overdue_count, 0);
        assert_eq!(bills.due_soon_count, 0);
        assert_eq!(bills.pending_amount, 0.0);
    }
}
