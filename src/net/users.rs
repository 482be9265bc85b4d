//! User administration.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::client::{ApiClient, Method};
use super::error::{ApiError, RequestKind};
use super::types::{ProfileUpdate, SignUpParams, UpdateUserRoles, User, UserEnvelope, UserList};

const COLLECTION: &str = "/users/";

fn user_path(user_id: i64) -> String {
    format!("/users/{user_id}")
}

/// # Errors
///
/// [`ApiError::Forbidden`] for non-admin sessions.
pub async fn list(api: &ApiClient, token: &str) -> Result<Vec<User>, ApiError> {
    api.get::<UserList>(COLLECTION, Some(token))
        .await
        .map(|body| body.users)
        .inspect_err(|e| log::warn!("list users failed: {e}"))
}

/// # Errors
///
/// Propagates the classified request failure.
pub async fn get(api: &ApiClient, token: &str, user_id: i64) -> Result<User, ApiError> {
    api.get::<UserEnvelope>(&user_path(user_id), Some(token))
        .await
        .map(|body| body.user)
        .inspect_err(|e| log::warn!("get user {user_id} failed: {e}"))
}

/// # Errors
///
/// [`ApiError::Conflict`] when the username or email is in use.
pub async fn create(api: &ApiClient, token: &str, params: &SignUpParams) -> Result<User, ApiError> {
    api.send_json(Method::Post, RequestKind::Write, COLLECTION, Some(token), params)
        .await
        .inspect_err(|e| log::warn!("create user failed: {e}"))
}

/// Replace the user's role set.
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn update_roles(api: &ApiClient, token: &str, body: &UpdateUserRoles) -> Result<User, ApiError> {
    api.send_json::<_, UserEnvelope>(Method::Patch, RequestKind::Write, &user_path(body.user_id), Some(token), body)
        .await
        .map(|envelope| envelope.user)
        .inspect_err(|e| log::warn!("update user {} failed: {e}", body.user_id))
}

/// Update the signed-in user's own name, email and optionally password.
///
/// # Errors
///
/// [`ApiError::Conflict`] when the username or email is in use.
pub async fn update_profile(api: &ApiClient, token: &str, body: &ProfileUpdate) -> Result<(), ApiError> {
    api.send_json_unit(Method::Patch, RequestKind::Write, &user_path(body.user_id), Some(token), body)
        .await
        .inspect_err(|e| log::warn!("update profile failed: {e}"))
}

/// # Errors
///
/// [`ApiError::ForeignKeyConflict`] while movements reference the user.
pub async fn delete(api: &ApiClient, token: &str, user_id: i64) -> Result<(), ApiError> {
    api.delete(&user_path(user_id), Some(token))
        .await
        .inspect_err(|e| log::warn!("delete user {user_id} failed: {e}"))
}
