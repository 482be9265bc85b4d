//! Equipment CRUD plus unit sub-actions (add, maintenance, delivery).

#[cfg(test)]
#[path = "equipment_test.rs"]
mod equipment_test;

use super::client::{ApiClient, Method};
use super::error::{ApiError, RequestKind};
use super::types::{DeliveryRequest, Equipment, EquipmentPayload, EquipmentUnit, MaintenanceRequest, NewUnit};

const COLLECTION: &str = "/equipment";
const UNITS: &str = "/equipment/units";

fn equipment_path(equipment_id: i64) -> String {
    format!("{COLLECTION}/{equipment_id}")
}

fn units_query(serial_number: Option<&str>) -> String {
    match serial_number.map(str::trim).filter(|s| !s.is_empty()) {
        Some(serial) => format!("{UNITS}?serialNumber={}", encode_component(serial)),
        None => UNITS.to_owned(),
    }
}

/// Serial numbers are digits, but the search box accepts anything.
fn encode_component(raw: &str) -> String {
    raw.bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
                char::from(b).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect()
}

fn unit_action_path(unit_id: i64, action: &str) -> String {
    format!("{UNITS}/{unit_id}/{action}")
}

/// # Errors
///
/// Propagates the classified request failure.
pub async fn list(api: &ApiClient, token: &str) -> Result<Vec<Equipment>, ApiError> {
    api.get(COLLECTION, Some(token))
        .await
        .inspect_err(|e| log::error!("list equipment failed: {e}"))
}

/// # Errors
///
/// Propagates the classified request failure.
pub async fn get(api: &ApiClient, token: &str, equipment_id: i64) -> Result<Equipment, ApiError> {
    api.get(&equipment_path(equipment_id), Some(token))
        .await
        .inspect_err(|e| log::warn!("get equipment {equipment_id} failed: {e}"))
}

/// Create an equipment model together with its initial units.
///
/// # Errors
///
/// [`ApiError::Conflict`] for duplicate names or serial numbers.
pub async fn create(api: &ApiClient, token: &str, payload: &EquipmentPayload) -> Result<(), ApiError> {
    api.send_json_unit(Method::Post, RequestKind::Write, COLLECTION, Some(token), payload)
        .await
        .inspect_err(|e| log::warn!("create equipment failed: {e}"))
}

/// Update an equipment model; units flagged `deleted` are removed.
///
/// # Errors
///
/// [`ApiError::Conflict`] for duplicate names or serial numbers.
pub async fn update(api: &ApiClient, token: &str, equipment_id: i64, payload: &EquipmentPayload) -> Result<(), ApiError> {
    api.send_json_unit(Method::Patch, RequestKind::Write, &equipment_path(equipment_id), Some(token), payload)
        .await
        .inspect_err(|e| log::warn!("update equipment {equipment_id} failed: {e}"))
}

/// # Errors
///
/// [`ApiError::ForeignKeyConflict`] while movements reference its units.
pub async fn delete(api: &ApiClient, token: &str, equipment_id: i64) -> Result<(), ApiError> {
    api.delete(&equipment_path(equipment_id), Some(token))
        .await
        .inspect_err(|e| log::warn!("delete equipment {equipment_id} failed: {e}"))
}

/// Units across all equipment, optionally filtered by serial number.
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn list_units(api: &ApiClient, token: &str, serial_number: Option<&str>) -> Result<Vec<EquipmentUnit>, ApiError> {
    api.get(&units_query(serial_number), Some(token))
        .await
        .inspect_err(|e| log::warn!("list units failed: {e}"))
}

/// # Errors
///
/// [`ApiError::Conflict`] for a duplicate serial number.
pub async fn add_unit(api: &ApiClient, token: &str, unit: &NewUnit) -> Result<(), ApiError> {
    api.send_json_unit(Method::Post, RequestKind::Write, UNITS, Some(token), unit)
        .await
        .inspect_err(|e| log::warn!("add unit failed: {e}"))
}

/// Record a maintenance window for a unit.
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn start_maintenance(
    api: &ApiClient,
    token: &str,
    unit_id: i64,
    request: &MaintenanceRequest,
) -> Result<(), ApiError> {
    api.send_json_unit(Method::Post, RequestKind::Write, &unit_action_path(unit_id, "maintenance"), Some(token), request)
        .await
        .inspect_err(|e| log::warn!("maintenance for unit {unit_id} failed: {e}"))
}

/// Deliver a unit to an organization.
///
/// # Errors
///
/// Propagates the classified request failure.
pub async fn deliver(api: &ApiClient, token: &str, unit_id: i64, request: &DeliveryRequest) -> Result<(), ApiError> {
    api.send_json_unit(Method::Post, RequestKind::Write, &unit_action_path(unit_id, "delivery"), Some(token), request)
        .await
        .inspect_err(|e| log::warn!("delivery for unit {unit_id} failed: {e}"))
}
