//! Browser helpers and framework glue.
//!
//! Modules here either touch browser APIs behind the `csr` feature or wire
//! plain state types into Leptos reactivity. Pure logic lives in `state`.

pub mod auth;
pub mod notice;
pub mod query;
pub mod storage;
pub mod theme;
pub mod validate;
