//! Sign-in, registration and the session profile read.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::client::{ApiClient, Method};
use super::error::{ApiError, RequestKind};
use super::types::{AuthResponse, SignInParams, SignUpParams, User};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";
pub const PROFILE_ENDPOINT: &str = "/auth/profile";

/// Exchange credentials for a bearer token.
///
/// # Errors
///
/// [`ApiError::Credential`] when the server rejects the credentials.
pub async fn sign_in(api: &ApiClient, params: &SignInParams) -> Result<AuthResponse, ApiError> {
    api.send_json(Method::Post, RequestKind::Auth, LOGIN_ENDPOINT, None, &params.body())
        .await
        .inspect_err(|e| log::warn!("sign in failed: {e}"))
}

/// Register an account; the response carries a token for immediate use.
///
/// # Errors
///
/// [`ApiError::Conflict`] when the username or email is taken;
/// [`ApiError::Credential`] for other rejected registrations.
pub async fn sign_up(api: &ApiClient, params: &SignUpParams) -> Result<AuthResponse, ApiError> {
    api.send_json(Method::Post, RequestKind::Auth, REGISTER_ENDPOINT, None, params)
        .await
        .inspect_err(|e| log::warn!("sign up failed: {e}"))
}

/// Fetch the profile for `token`.
///
/// The token is passed explicitly rather than read from shared state so a
/// concurrent sign-in or sign-out cannot change which credential is used.
///
/// # Errors
///
/// [`ApiError::Unauthorized`] when the token is rejected,
/// [`ApiError::Network`] on transport failure.
pub async fn fetch_profile(api: &ApiClient, token: &str) -> Result<User, ApiError> {
    api.get(PROFILE_ENDPOINT, Some(token))
        .await
        .inspect_err(|e| log::warn!("profile fetch failed: {e}"))
}
