//! Typed API failures and HTTP status classification.
//!
//! ERROR HANDLING
//! ==============
//! The server reports failures as a status code plus `{ "message": "..." }`.
//! `classify` maps that pair onto [`ApiError`] using the kind of request that
//! failed, since the same status means different things on different calls
//! (a 409 on delete is a dangling reference, on create a duplicate name).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// What the failing request was trying to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    /// Login and registration.
    Auth,
    Read,
    /// Create or update.
    Write,
    Delete,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Login/registration rejected (HTTP 400/401 on auth endpoints).
    #[error("invalid credentials: {message}")]
    Credential { message: String },
    /// Bearer token rejected outside the auth endpoints.
    #[error("session is no longer valid")]
    Unauthorized,
    #[error("operation not permitted")]
    Forbidden,
    #[error("resource not found")]
    NotFound,
    /// Duplicate unique field on create/update.
    #[error("conflict: {message}")]
    Conflict { message: String },
    /// Delete blocked by dependent records.
    #[error("resource is still referenced: {message}")]
    ForeignKeyConflict { message: String },
    /// Any other 4xx.
    #[error("request rejected ({status}): {message}")]
    Validation { status: u16, message: String },
    /// No response, or a 5xx.
    #[error("network error: {message}")]
    Network { message: String },
    /// Body could not be encoded or decoded.
    #[error("malformed payload: {message}")]
    Serialization { message: String },
}

impl ApiError {
    /// Whether this failure should raise the global connectivity notice.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Message suitable for a toast or inline form error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Credential { message } | Self::Validation { message, .. } => message.clone(),
            Self::Unauthorized => "Your session has expired. Sign in again.".to_owned(),
            Self::Forbidden => "You do not have permission to do that.".to_owned(),
            Self::NotFound => "The record no longer exists.".to_owned(),
            Self::Conflict { .. } => "That name is already in use.".to_owned(),
            Self::ForeignKeyConflict { .. } => "It is still referenced by other records and cannot be deleted.".to_owned(),
            Self::Network { .. } => "Could not reach the server. Check your connection.".to_owned(),
            Self::Serialization { .. } => "The server sent an unexpected response.".to_owned(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    data: Option<Box<ErrorBody>>,
}

/// Extract the server's `message`, accepting both `{message}` and
/// `{data: {message}}` envelopes.
#[must_use]
pub fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or_else(|| parsed.data.and_then(|inner| inner.message))
        .filter(|message| !message.trim().is_empty())
}

/// Map a non-success response onto an [`ApiError`].
#[must_use]
pub fn classify(kind: RequestKind, status: u16, body: &str) -> ApiError {
    let message = server_message(body).unwrap_or_else(|| default_message(status));
    match (kind, status) {
        (_, 500..) => ApiError::Network { message },
        (RequestKind::Auth, 400 | 401) => ApiError::Credential { message },
        (_, 401) => ApiError::Unauthorized,
        (_, 403) => ApiError::Forbidden,
        (_, 404) => ApiError::NotFound,
        (RequestKind::Delete, 409) => ApiError::ForeignKeyConflict { message },
        (_, 409) => ApiError::Conflict { message },
        (_, 400..=499) => ApiError::Validation { status, message },
        _ => ApiError::Serialization { message: format!("unexpected status {status}") },
    }
}

fn default_message(status: u16) -> String {
    format!("request failed: {status}")
}
