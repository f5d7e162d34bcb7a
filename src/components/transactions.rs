//! Transactions Table
//!
//! Recent transactions with type-coloured amounts.

use leptos::*;

use crate::components::loading::ListSkeleton;
use crate::state::global::GlobalState;
use crate::view::transactions::{table_body, TableBody, TransactionRow, EMPTY_TABLE_TEXT};

/// Recent transactions section
#[component]
pub fn TransactionsTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let snapshot = state.snapshot;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Recent Transactions"</h2>

            {move || match snapshot.get() {
                None => view! { <ListSkeleton count=5 /> }.into_view(),
                Some(s) => view! {
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="text-left text-gray-400 border-b border-gray-700">
                                <th class="pb-2 font-medium">"Description"</th>
                                <th class="pb-2 font-medium">"Category"</th>
                                <th class="pb-2 font-medium">"Date"</th>
                                <th class="pb-2 font-medium text-right">"Amount"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {match table_body(&s.transactions) {
                                TableBody::Placeholder => view! {
                                    <tr>
                                        <td colspan="4" class="py-4 text-center text-gray-500">
                                            {EMPTY_TABLE_TEXT}
                                        </td>
                                    </tr>
                                }.into_view(),
                                TableBody::Rows(rows) => rows.into_iter().map(|row| view! {
                                    <TransactionItem row=row />
                                }).collect_view(),
                            }}
                        </tbody>
                    </table>
                }.into_view(),
            }}
        </section>
    }
}

/// One table row
#[component]
fn TransactionItem(row: TransactionRow) -> impl IntoView {
    view! {
        <tr class="border-b border-gray-700 last:border-0">
            <td class="py-2">
                <div class="flex items-center gap-2">
                    <span
                        class="w-2 h-2 rounded-full"
                        style=format!("background-color: {}", row.tone.color())
                    />
                    {row.description}
                </div>
            </td>
            <td class="py-2">
                <span class="px-2 py-0.5 rounded-full bg-gray-700 text-xs">{row.category}</span>
            </td>
            <td class="py-2 text-gray-400">{row.date_text}</td>
            <td class=format!("py-2 text-right font-semibold {}", row.tone.text_class())>
                {row.amount_text}
            </td>
        </tr>
    }
}
