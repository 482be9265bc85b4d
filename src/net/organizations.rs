//! Organization CRUD (admin only on the server side).

#[cfg(test)]
#[path = "organizations_test.rs"]
mod organizations_test;

use super::client::{ApiClient, Method};
use super::error::{ApiError, RequestKind};
use super::types::{Organization, OrganizationPayload};

const COLLECTION: &str = "/organizations";

fn organization_path(organization_id: i64) -> String {
    format!("{COLLECTION}/{organization_id}")
}

/// # Errors
///
/// Propagates the classified request failure.
pub async fn list(api: &ApiClient, token: &str) -> Result<Vec<Organization>, ApiError> {
    api.get(COLLECTION, Some(token))
        .await
        .inspect_err(|e| log::warn!("list organizations failed: {e}"))
}

/// # Errors
///
/// Propagates the classified request failure.
pub async fn get(api: &ApiClient, token: &str, organization_id: i64) -> Result<Organization, ApiError> {
    api.get(&organization_path(organization_id), Some(token))
        .await
        .inspect_err(|e| log::warn!("get organization {organization_id} failed: {e}"))
}

/// # Errors
///
/// [`ApiError::Conflict`] when the name is already taken.
pub async fn create(api: &ApiClient, token: &str, payload: &OrganizationPayload) -> Result<Organization, ApiError> {
    api.send_json(Method::Post, RequestKind::Write, COLLECTION, Some(token), payload)
        .await
        .inspect_err(|e| log::warn!("create organization failed: {e}"))
}

/// # Errors
///
/// [`ApiError::Conflict`] when the name is already taken.
pub async fn update(
    api: &ApiClient,
    token: &str,
    organization_id: i64,
    payload: &OrganizationPayload,
) -> Result<(), ApiError> {
    api.send_json_unit(Method::Patch, RequestKind::Write, &organization_path(organization_id), Some(token), payload)
        .await
        .inspect_err(|e| log::warn!("update organization {organization_id} failed: {e}"))
}

/// # Errors
///
/// [`ApiError::ForeignKeyConflict`] while units are still assigned to it.
pub async fn delete(api: &ApiClient, token: &str, organization_id: i64) -> Result<(), ApiError> {
    api.delete(&organization_path(organization_id), Some(token))
        .await
        .inspect_err(|e| log::warn!("delete organization {organization_id} failed: {e}"))
}
