//! View Models
//!
//! Pure transforms from the dashboard snapshot to the typed models the
//! components render. Nothing in this module touches the DOM, so every
//! transform is unit-testable on the host.

pub mod bills;
pub mod categories;
pub mod currency;
pub mod goals;
pub mod monthly;
pub mod transactions;
