//! Dashboard Page
//!
//! The single dashboard view: one snapshot fetch on mount, every section
//! rendered from it.

use leptos::*;

use crate::api;
use crate::chart::ChartSpec;
use crate::components::{
    BillsPanel, ChartPanel, ChartSkeleton, GoalsPanel, SummaryCards, TransactionsTable,
};
use crate::state::global::GlobalState;
use crate::view::{categories, monthly};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let snapshot = state.snapshot;
    let loading = state.loading;

    // Fetch the snapshot once on mount. A failed fetch is logged and the
    // page stays in its pre-render state.
    create_effect(move |_| {
        spawn_local(async move {
            loading.set(true);

            match api::fetch_dashboard().await {
                Ok(data) => snapshot.set(Some(data)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch dashboard: {}", e).into(),
                    );
                }
            }

            loading.set(false);
        });
    });

    // Chart descriptions derived from the snapshot
    let monthly_view =
        create_memo(move |_| snapshot.get().map(|s| monthly::monthly_view(&s.monthly)));
    let cashflow = create_memo(move |_| monthly_view.get().map(|v| monthly::cashflow_chart(&v)));
    let comparison = create_memo(move |_| monthly_view.get().map(|v| monthly::savings_chart(&v)));
    let breakdown = create_memo(move |_| {
        snapshot
            .get()
            .map(|s| categories::breakdown_chart(s.income, &s.categories))
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Your money at a glance"</p>
                </div>

                {move || loading.get().then(|| view! {
                    <div class="loading-spinner w-6 h-6" />
                })}
            </div>

            // Headline totals
            <SummaryCards />

            // Monthly income vs expense
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Monthly Overview"</h2>
                <ChartSection spec=cashflow />
            </section>

            // Category breakdown and savings comparison
            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Spending by Category"</h2>
                    <ChartSection spec=breakdown />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Income, Expense & Savings"</h2>
                    <ChartSection spec=comparison />
                </section>
            </div>

            // Bills and goals
            <div class="grid md:grid-cols-2 gap-8">
                <BillsPanel />
                <GoalsPanel />
            </div>

            // Recent activity
            <TransactionsTable />
        </div>
    }
}

/// Chart slot: skeleton until the description exists
#[component]
fn ChartSection(
    #[prop(into)]
    spec: Signal<Option<ChartSpec>>,
) -> impl IntoView {
    view! {
        {move || {
            if spec.get().is_some() {
                view! { <ChartPanel spec=spec /> }.into_view()
            } else {
                view! { <ChartSkeleton /> }.into_view()
            }
        }}
    }
}
