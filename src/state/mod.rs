//! Plain-data application state.
//!
//! Nothing in this module touches Leptos or the browser. Components hold
//! these types inside `RwSignal`s and drive them from `util` glue, so every
//! transition here is unit-testable natively.

pub mod auth;
pub mod query;
pub mod session;
pub mod toast;
