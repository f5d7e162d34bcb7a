//! FinBoard Dashboard
//!
//! Personal finance dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Income / expense / balance overview
//! - Recent transactions table
//! - Upcoming bills with due-date urgency
//! - Savings goal progress
//! - Monthly and category charts rendered on canvas
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. On page load it fetches a single pre-aggregated snapshot
//! from the FinBoard API and renders every dashboard section from it.

use leptos::*;

mod api;
mod app;
mod chart;
mod components;
mod pages;
mod state;
mod view;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
