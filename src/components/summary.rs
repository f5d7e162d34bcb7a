//! Summary Cards
//!
//! Headline income, expense and balance totals.

use leptos::*;

use crate::components::loading::CardSkeleton;
use crate::state::global::GlobalState;
use crate::view::currency::format_inr;

/// Row of headline stat cards
#[component]
pub fn SummaryCards() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let snapshot = state.snapshot;

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            {move || match snapshot.get() {
                None => view! {
                    <CardSkeleton />
                    <CardSkeleton />
                    <CardSkeleton />
                }.into_view(),
                Some(s) => view! {
                    <StatCard label="Total Income" accent="text-green-400" amount=s.income />
                    <StatCard label="Total Expense" accent="text-red-400" amount=s.expense />
                    <StatCard label="Balance" accent="text-white" amount=s.balance />
                }.into_view(),
            }}
        </div>
    }
}

/// Single stat card with a formatted amount
#[component]
fn StatCard(
    label: &'static str,
    accent: &'static str,
    amount: f64,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class=format!("text-3xl font-bold mt-2 {}", accent)>
                {format_inr(amount)}
            </div>
        </div>
    }
}
