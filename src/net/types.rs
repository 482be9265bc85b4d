//! Wire DTOs for the inventory API.
//!
//! DESIGN
//! ======
//! Field names follow the server's camelCase JSON. Identifiers are decoded
//! leniently (integer, integral float, or numeric string) because the API
//! is not consistent about how it serializes primary keys.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// USERS AND ROLES
// =============================================================================

/// Permission tag attached to a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    Employee,
    /// Any role name this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl RoleName {
    /// Roles an administrator can grant from the users table.
    pub const ASSIGNABLE: [Self; 2] = [Self::Admin, Self::Employee];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Employee => "Employee",
            Self::Unknown => "Unknown",
        }
    }
}

/// A role grant as embedded in a [`User`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub role_id: Option<i64>,
    pub name: RoleName,
}

/// An account as returned by `/auth/profile` and `/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "userId", deserialize_with = "deserialize_id")]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<UserRole>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<String>,
    #[serde(default, alias = "deleted_at")]
    pub deleted_at: Option<String>,
}

impl User {
    /// Whether any of the user's roles is `role`.
    #[must_use]
    pub fn has_role(&self, role: RoleName) -> bool {
        self.roles.iter().any(|r| r.name == role)
    }

    /// Upper-cased first character of the username, for avatar badges.
    #[must_use]
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Body of `POST /auth/login` and `POST /auth/register` responses.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Credentials entered on the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignInParams {
    pub name: String,
    pub password: String,
}

impl SignInParams {
    /// Request body; the server expects the login name as `username`.
    #[must_use]
    pub fn body(&self) -> serde_json::Value {
        serde_json::json!({ "username": self.name, "password": self.password })
    }
}

/// Body of `POST /auth/register` and `POST /users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<RoleName>,
}

/// Body of `PATCH /users/{id}` when the signed-in user edits themself.
/// A `None` password leaves it unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Body of `PATCH /users/{id}` from the admin roles editor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRoles {
    pub user_id: i64,
    pub roles: Vec<RoleName>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserList {
    pub users: Vec<User>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: User,
}

// =============================================================================
// CATALOG
// =============================================================================

/// Equipment manufacturer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Make {
    #[serde(deserialize_with = "deserialize_id")]
    pub make_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Equipment category (laptop, printer, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentType {
    #[serde(deserialize_with = "deserialize_id")]
    pub equipment_type_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Client organization that units are assigned or delivered to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(deserialize_with = "deserialize_id")]
    pub organization_id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
}

/// Create/update body for makes and equipment types.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogPayload {
    pub name: String,
    pub description: String,
}

/// Create/update body for organizations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrganizationPayload {
    pub name: String,
    pub location: String,
}

// =============================================================================
// EQUIPMENT
// =============================================================================

/// Physical condition of a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentState {
    #[default]
    Ok,
    NeedsRepair,
    Delivered,
    InMaintenance,
}

impl EquipmentState {
    pub const ALL: [Self; 4] = [Self::Ok, Self::NeedsRepair, Self::Delivered, Self::InMaintenance];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NeedsRepair => "needs_repair",
            Self::Delivered => "delivered",
            Self::InMaintenance => "in_maintenance",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.as_str() == raw)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "Working",
            Self::NeedsRepair => "Needs repair",
            Self::Delivered => "Delivered",
            Self::InMaintenance => "In maintenance",
        }
    }
}

/// A single serial-numbered instance of an equipment model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentUnit {
    #[serde(deserialize_with = "deserialize_id")]
    pub equipment_unit_id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub serial_number: i64,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub equipment_id: Option<i64>,
    #[serde(default)]
    pub state: EquipmentState,
    #[serde(default)]
    pub acquired_at: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub organization: Option<Organization>,
    #[serde(default)]
    pub location: String,
    /// Parent model, embedded by `/equipment/units` listings.
    #[serde(default)]
    pub equipment: Option<UnitEquipment>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitEquipment {
    pub name: String,
}

/// An equipment model with its catalog references and units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    #[serde(deserialize_with = "deserialize_id")]
    pub equipment_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub type_id: Option<i64>,
    #[serde(default, rename = "type")]
    pub equipment_type: Option<EquipmentType>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub make_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_make")]
    pub make: Option<Make>,
    #[serde(default)]
    pub units: Vec<EquipmentUnit>,
}

impl Equipment {
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.equipment_type.as_ref().map_or("", |t| t.name.as_str())
    }

    #[must_use]
    pub fn make_name(&self) -> &str {
        self.make.as_ref().map_or("", |m| m.name.as_str())
    }
}

/// Unit entry inside an equipment create/update body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_unit_id: Option<i64>,
    pub serial_number: i64,
    pub state: EquipmentState,
    pub acquired_at: String,
    pub organization_id: i64,
    pub location: String,
    pub deleted: bool,
}

/// Body of `POST /equipment` and `PATCH /equipment/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentPayload {
    pub name: String,
    pub description: String,
    pub make_id: i64,
    pub type_id: i64,
    pub units: Vec<UnitPayload>,
}

/// Body of `POST /equipment/units`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUnit {
    pub equipment_id: i64,
    #[serde(flatten)]
    pub unit: UnitPayload,
}

/// Body of `POST /equipment/units/{id}/maintenance`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub started_at: String,
    pub ended_at: String,
}

/// Body of `POST /equipment/units/{id}/delivery`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRequest {
    pub organization_id: i64,
}

// =============================================================================
// MOVEMENTS
// =============================================================================

/// Kind of activity recorded against a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Transport,
    Delivery,
    #[serde(rename = "mantenimiento")]
    Maintenance,
    Entry,
    #[serde(other)]
    Unknown,
}

impl MovementKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Delivery => "Delivery",
            Self::Maintenance => "Maintenance",
            Self::Entry => "Entry",
            Self::Unknown => "Other",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovementType {
    pub name: MovementKind,
}

/// An entry of the activity log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    #[serde(deserialize_with = "deserialize_id")]
    pub movement_id: i64,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub equipment_unit_id: Option<i64>,
    #[serde(default)]
    pub unit: Option<EquipmentUnit>,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    #[serde(default)]
    pub details: serde_json::Value,
}

/// Kind-specific payload of a [`Movement`].
#[derive(Clone, Debug, PartialEq)]
pub enum MovementDetails {
    Maintenance { started_at: String, ended_at: String },
    Delivery { organization: Organization },
    None,
}

impl Movement {
    #[must_use]
    pub fn kind(&self) -> MovementKind {
        self.movement_type.name
    }

    /// Decode `details` according to the movement kind. Shapes that do not
    /// match the kind yield [`MovementDetails::None`].
    #[must_use]
    pub fn details(&self) -> MovementDetails {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Maintenance {
            started_at: String,
            ended_at: String,
        }
        #[derive(Deserialize)]
        struct Delivery {
            organization: Organization,
        }

        match self.kind() {
            MovementKind::Maintenance => serde_json::from_value::<Maintenance>(self.details.clone())
                .map_or(MovementDetails::None, |m| MovementDetails::Maintenance {
                    started_at: m.started_at,
                    ended_at: m.ended_at,
                }),
            MovementKind::Delivery => serde_json::from_value::<Delivery>(self.details.clone())
                .map_or(MovementDetails::None, |d| MovementDetails::Delivery { organization: d.organization }),
            _ => MovementDetails::None,
        }
    }
}

// =============================================================================
// LENIENT DECODERS
// =============================================================================

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(&value).map_err(D::Error::custom)
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    id_from_value(&value).map(Some).map_err(D::Error::custom)
}

/// Older equipment payloads carry `make` as a bare name string.
fn deserialize_make<'de, D>(deserializer: D) -> Result<Option<Make>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(name) => Ok(Some(Make { make_id: 0, name, description: String::new() })),
        other => serde_json::from_value(other).map(Some).map_err(D::Error::custom),
    }
}

fn id_from_value(value: &serde_json::Value) -> Result<i64, String> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err("expected integer-compatible number".to_owned())
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("expected numeric id, got {raw:?}")),
        _ => Err("expected number".to_owned()),
    }
}
