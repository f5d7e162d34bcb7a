//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod bills;
pub mod chart;
pub mod goals;
pub mod loading;
pub mod nav;
pub mod summary;
pub mod transactions;

pub use bills::BillsPanel;
pub use chart::ChartPanel;
pub use goals::GoalsPanel;
pub use loading::{CardSkeleton, ChartSkeleton, ListSkeleton};
pub use nav::Nav;
pub use summary::SummaryCards;
pub use transactions::TransactionsTable;
