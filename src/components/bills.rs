//! Bills Panel
//!
//! Bill statistics and the upcoming bills list with due-date urgency.

use chrono::Local;
use leptos::*;

use crate::components::loading::ListSkeleton;
use crate::state::global::GlobalState;
use crate::view::bills::{rows as bill_rows, BillRow, EMPTY_BILLS_TEXT};
use crate::view::currency::format_inr;

/// Bills section: stats row plus upcoming list
#[component]
pub fn BillsPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let snapshot = state.snapshot;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Bills"</h2>

            {move || match snapshot.get() {
                None => view! { <ListSkeleton /> }.into_view(),
                Some(s) => {
                    let bills = s.bills.unwrap_or_default();
                    let today = Local::now().date_naive();
                    let rows = bill_rows(&bills.upcoming, today);

                    view! {
                        <div class="grid grid-cols-3 gap-4 mb-4 text-center">
                            <div>
                                <div class="text-2xl font-bold text-red-400">{bills.overdue_count}</div>
                                <div class="text-xs text-gray-400">"Overdue"</div>
                            </div>
                            <div>
                                <div class="text-2xl font-bold text-yellow-400">{bills.due_soon_count}</div>
                                <div class="text-xs text-gray-400">"Due Soon"</div>
                            </div>
                            <div>
                                <div class="text-2xl font-bold">{format_inr(bills.pending_amount)}</div>
                                <div class="text-xs text-gray-400">"Pending"</div>
                            </div>
                        </div>

                        <div class="space-y-2">
                            {if rows.is_empty() {
                                view! {
                                    <p class="text-center text-gray-500 py-4 text-sm">{EMPTY_BILLS_TEXT}</p>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|row| view! {
                                    <BillItem row=row />
                                }).collect_view()
                            }}
                        </div>
                    }.into_view()
                }
            }}
        </section>
    }
}

/// One upcoming bill with its urgency accent
#[component]
fn BillItem(row: BillRow) -> impl IntoView {
    let color = row.status.color();
    let label = row.status.label();

    view! {
        <div
            class="flex items-center justify-between bg-gray-900/40 rounded-lg px-3 py-2"
            style=format!("border-left: 3px solid {}", color)
        >
            <div>
                <div class="font-medium text-sm">{row.name}</div>
                <div class="text-xs text-gray-400">
                    {row.category} " • " {row.due_text}
                    {label.map(|text| view! {
                        <span class="ml-2" style=format!("color: {}", color)>{text}</span>
                    })}
                </div>
            </div>
            <div class="font-semibold" style=format!("color: {}", color)>{row.amount_text}</div>
        </div>
    }
}
