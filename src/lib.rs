//! # formotex-admin
//!
//! Leptos + WASM administrative dashboard for the Formotex equipment
//! inventory. The crate is a thin client over the remote inventory API:
//! persistence and business rules live server-side, while this crate owns
//! the session lifecycle, route guarding, form validation and list caching.
//!
//! Browser-only paths are gated behind the `csr` feature so the state layer
//! compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
