//! Routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own their form state and call service functions directly with the
//! session token. Lists come from token-keyed queries and are invalidated
//! after every successful mutation.

pub mod activities;
pub mod catalog;
pub mod equipment_form;
pub mod forbidden;
pub mod inventory;
pub mod layout;
pub mod login;
pub mod register;
pub mod users;

use crate::components::toast_host::Toaster;
use crate::net::error::ApiError;

/// Show a failed request as a toast. Network failures already raised the
/// rate-limited notice, so they are not repeated here.
pub(crate) fn report_error(toaster: Toaster, context: &str, err: &ApiError) {
    if !err.is_network() {
        toaster.error(format!("{context}: {}", err.user_message()));
    }
}
