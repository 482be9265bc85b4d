//! Make (manufacturer) CRUD.

#[cfg(test)]
#[path = "makes_test.rs"]
mod makes_test;

use super::client::{ApiClient, Method};
use super::error::{ApiError, RequestKind};
use super::types::{CatalogPayload, Make};

const COLLECTION: &str = "/makes";

fn make_path(make_id: i64) -> String {
    format!("{COLLECTION}/{make_id}")
}

/// # Errors
///
/// Propagates the classified request failure.
pub async fn list(api: &ApiClient, token: &str) -> Result<Vec<Make>, ApiError> {
    api.get(COLLECTION, Some(token))
        .await
        .inspect_err(|e| log::warn!("list makes failed: {e}"))
}

/// # Errors
///
/// Propagates the classified request failure.
pub async fn get(api: &ApiClient, token: &str, make_id: i64) -> Result<Make, ApiError> {
    api.get(&make_path(make_id), Some(token))
        .await
        .inspect_err(|e| log::warn!("get make {make_id} failed: {e}"))
}

/// # Errors
///
/// [`ApiError::Conflict`] when the name is already taken.
pub async fn create(api: &ApiClient, token: &str, payload: &CatalogPayload) -> Result<(), ApiError> {
    api.send_json_unit(Method::Post, RequestKind::Write, COLLECTION, Some(token), payload)
        .await
        .inspect_err(|e| log::warn!("create make failed: {e}"))
}

/// # Errors
///
/// [`ApiError::Conflict`] when the name is already taken.
pub async fn update(api: &ApiClient, token: &str, make_id: i64, payload: &CatalogPayload) -> Result<(), ApiError> {
    api.send_json_unit(Method::Patch, RequestKind::Write, &make_path(make_id), Some(token), payload)
        .await
        .inspect_err(|e| log::warn!("update make {make_id} failed: {e}"))
}

/// # Errors
///
/// [`ApiError::ForeignKeyConflict`] while equipment still references the make.
pub async fn delete(api: &ApiClient, token: &str, make_id: i64) -> Result<(), ApiError> {
    api.delete(&make_path(make_id), Some(token))
        .await
        .inspect_err(|e| log::warn!("delete make {make_id} failed: {e}"))
}
