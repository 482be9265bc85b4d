//! Equipment type CRUD.

#[cfg(test)]
#[path = "equipment_types_test.rs"]
mod equipment_types_test;

use super::client::{ApiClient, Method};
use super::error::{ApiError, RequestKind};
use super::types::{CatalogPayload, EquipmentType};

const COLLECTION: &str = "/equipment/types";

fn type_path(type_id: i64) -> String {
    format!("{COLLECTION}/{type_id}")
}

/// # Errors
///
/// Propagates the classified request failure.
pub async fn list(api: &ApiClient, token: &str) -> Result<Vec<EquipmentType>, ApiError> {
    api.get(COLLECTION, Some(token))
        .await
        .inspect_err(|e| log::warn!("list equipment types failed: {e}"))
}

/// # Errors
///
/// Propagates the classified request failure.
pub async fn get(api: &ApiClient, token: &str, type_id: i64) -> Result<EquipmentType, ApiError> {
    api.get(&type_path(type_id), Some(token))
        .await
        .inspect_err(|e| log::warn!("get equipment type {type_id} failed: {e}"))
}

/// # Errors
///
/// [`ApiError::Conflict`] when the name is already taken.
pub async fn create(api: &ApiClient, token: &str, payload: &CatalogPayload) -> Result<(), ApiError> {
    api.send_json_unit(Method::Post, RequestKind::Write, COLLECTION, Some(token), payload)
        .await
        .inspect_err(|e| log::warn!("create equipment type failed: {e}"))
}

/// # Errors
///
/// [`ApiError::Conflict`] when the name is already taken.
pub async fn update(api: &ApiClient, token: &str, type_id: i64, payload: &CatalogPayload) -> Result<(), ApiError> {
    api.send_json_unit(Method::Patch, RequestKind::Write, &type_path(type_id), Some(token), payload)
        .await
        .inspect_err(|e| log::warn!("update equipment type {type_id} failed: {e}"))
}

/// # Errors
///
/// [`ApiError::ForeignKeyConflict`] while equipment still uses the type.
pub async fn delete(api: &ApiClient, token: &str, type_id: i64) -> Result<(), ApiError> {
    api.delete(&type_path(type_id), Some(token))
        .await
        .inspect_err(|e| log::warn!("delete equipment type {type_id} failed: {e}"))
}
