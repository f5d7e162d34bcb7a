//! Goals Panel
//!
//! Savings goal progress bars.

use leptos::*;

use crate::components::loading::ListSkeleton;
use crate::state::global::GlobalState;
use crate::view::goals::{rows as goal_rows, GoalRow, EMPTY_GOALS_TEXT};

/// Goals section
#[component]
pub fn GoalsPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let snapshot = state.snapshot;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Goals"</h2>

            {move || match snapshot.get() {
                None => view! { <ListSkeleton /> }.into_view(),
                Some(s) => {
                    let rows = goal_rows(&s.goals);

                    if rows.is_empty() {
                        view! {
                            <p class="text-center text-gray-500 py-4 text-sm">{EMPTY_GOALS_TEXT}</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="space-y-3">
                                {rows.into_iter().map(|row| view! {
                                    <GoalItem row=row />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </section>
    }
}

/// One goal with its progress bar
#[component]
fn GoalItem(row: GoalRow) -> impl IntoView {
    view! {
        <div class="bg-gray-900/40 rounded-lg p-3">
            <div class="flex justify-between mb-2">
                <span class="font-medium text-sm">{row.name}</span>
                <span class="text-xs text-gray-400">{row.progress_text}</span>
            </div>
            <div class="w-full h-1.5 bg-gray-700 rounded overflow-hidden">
                <div
                    class="h-full bg-green-500 rounded"
                    style=format!("width: {}%", row.fill_percent)
                />
            </div>
        </div>
    }
}
