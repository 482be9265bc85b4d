//! Reusable view components shared across pages.

pub mod confirm_dialog;
pub mod dashboard_page;
pub mod field;
pub mod pagination;
pub mod profile_dialog;
pub mod route_guard;
pub mod sidebar;
pub mod spinner;
pub mod toast_host;
