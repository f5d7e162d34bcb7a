//! State Management
//!
//! Global application state and the dashboard snapshot types.

pub mod global;

pub use global::{
    provide_global_state, BillsSummary, CategoryTotal, GlobalState, Goal, MonthlyTotal, Snapshot,
    Transaction, TxKind, UpcomingBill,
};
