//! Client-side form schemas.
//!
//! Each validator turns raw form input into the request body it will be
//! sent as, or into [`FieldErrors`] keyed by the form field name. A form
//! with errors never reaches the network.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;

use crate::net::types::{
    CatalogPayload, Equipment, EquipmentPayload, EquipmentState, OrganizationPayload, ProfileUpdate, RoleName,
    SignInParams, SignUpParams, UnitPayload,
};

pub const NAME_MAX: usize = 255;
pub const DESCRIPTION_MAX: usize = 9999;
const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Field name -> message for the first problem found in that field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Record `message` unless `field` already has one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

fn required(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

fn bounded(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    if value.trim().chars().count() > max {
        errors.insert(field, format!("Must be at most {max} characters"));
    }
}

/// First password rule `password` breaks, if any.
#[must_use]
pub fn password_problem(password: &str) -> Option<&'static str> {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        Some("Password needs at least one uppercase letter")
    } else if !password.chars().any(|c| c.is_ascii_lowercase()) {
        Some("Password needs at least one lowercase letter")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some("Password needs at least one number")
    } else if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        Some("Password needs at least one of !@#$%^&*")
    } else {
        None
    }
}

/// Loose shape check; the server is the authority on addresses.
#[must_use]
pub fn is_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
        && !raw.trim().contains(char::is_whitespace)
}

/// `YYYY-MM-DD`, as produced by `<input type="date">`.
#[must_use]
pub fn is_date(raw: &str) -> bool {
    let parts: Vec<&str> = raw.split('-').collect();
    let [year, month, day] = parts[..] else {
        return false;
    };
    let digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if !(digits(year, 4) && digits(month, 2) && digits(day, 2)) {
        return false;
    }
    let month: u32 = month.parse().unwrap_or(0);
    let day: u32 = day.parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// Today's date as `YYYY-MM-DD` from the browser clock; empty natively.
#[must_use]
pub fn today() -> String {
    #[cfg(feature = "csr")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.get(..10).unwrap_or_default().to_owned()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

// =============================================================================
// AUTH AND USERS
// =============================================================================

/// # Errors
///
/// Both fields are required.
pub fn sign_in(username: &str, password: &str) -> Result<SignInParams, FieldErrors> {
    let mut errors = FieldErrors::default();
    required(&mut errors, "username", username, "Username is required");
    required(&mut errors, "password", password, "Password is required");
    errors.finish(|| SignInParams { name: username.trim().to_owned(), password: password.to_owned() })
}

/// Raw input of the registration and user-creation forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

fn check_account(form: &AccountForm, errors: &mut FieldErrors) {
    required(errors, "username", &form.username, "Username is required");
    required(errors, "email", &form.email, "Email is required");
    if !form.email.trim().is_empty() && !is_email(&form.email) {
        errors.insert("email", "Email is invalid");
    }
    if let Some(problem) = password_problem(&form.password) {
        errors.insert("password", problem);
    }
    if let Some(problem) = password_problem(&form.repeat_password) {
        errors.insert("repeat_password", problem);
    }
    if form.password != form.repeat_password {
        errors.insert("password", "Passwords do not match");
    }
}

fn account_body(form: &AccountForm, roles: Vec<RoleName>) -> SignUpParams {
    SignUpParams {
        username: form.username.trim().to_owned(),
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
        roles,
    }
}

/// Self-registration; new accounts are employees.
///
/// # Errors
///
/// Field errors for missing or malformed input and weak or mismatched
/// passwords.
pub fn sign_up(form: &AccountForm) -> Result<SignUpParams, FieldErrors> {
    let mut errors = FieldErrors::default();
    check_account(form, &mut errors);
    errors.finish(|| account_body(form, vec![RoleName::Employee]))
}

/// Admin-created account with explicitly chosen roles.
///
/// # Errors
///
/// Same rules as [`sign_up`].
pub fn new_user(form: &AccountForm, roles: &[RoleName]) -> Result<SignUpParams, FieldErrors> {
    let mut errors = FieldErrors::default();
    check_account(form, &mut errors);
    errors.finish(|| account_body(form, roles.to_vec()))
}

/// Profile self-edit. Blank passwords keep the current one.
///
/// # Errors
///
/// Username and email are required; a new password must follow the
/// password rules and be repeated exactly.
pub fn profile(user_id: i64, form: &AccountForm) -> Result<ProfileUpdate, FieldErrors> {
    let mut errors = FieldErrors::default();
    required(&mut errors, "username", &form.username, "Username is required");
    required(&mut errors, "email", &form.email, "Email is required");
    if !form.password.is_empty() {
        if let Some(problem) = password_problem(&form.password) {
            errors.insert("password", problem);
        }
    }
    if form.password != form.repeat_password {
        errors.insert("password", "Passwords do not match");
    }
    errors.finish(|| ProfileUpdate {
        user_id,
        username: form.username.trim().to_owned(),
        email: form.email.trim().to_owned(),
        password: Some(form.password.clone()).filter(|p| !p.is_empty()),
    })
}

// =============================================================================
// CATALOG
// =============================================================================

/// Makes and equipment types.
///
/// # Errors
///
/// Name and description are required; the name is bounded.
pub fn catalog_entry(name: &str, description: &str) -> Result<CatalogPayload, FieldErrors> {
    let mut errors = FieldErrors::default();
    required(&mut errors, "name", name, "Name is required");
    bounded(&mut errors, "name", name, NAME_MAX);
    required(&mut errors, "description", description, "Description is required");
    errors.finish(|| CatalogPayload { name: name.trim().to_owned(), description: description.trim().to_owned() })
}

/// # Errors
///
/// Name and location are required.
pub fn organization(name: &str, location: &str) -> Result<OrganizationPayload, FieldErrors> {
    let mut errors = FieldErrors::default();
    required(&mut errors, "name", name, "Name is required");
    bounded(&mut errors, "name", name, NAME_MAX);
    required(&mut errors, "location", location, "Location is required");
    errors.finish(|| OrganizationPayload { name: name.trim().to_owned(), location: location.trim().to_owned() })
}

// =============================================================================
// EQUIPMENT
// =============================================================================

/// Editable state of one unit row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitDraft {
    pub equipment_unit_id: Option<i64>,
    pub serial_number: String,
    pub state: EquipmentState,
    pub acquired_at: String,
    pub organization_id: Option<i64>,
    pub location: String,
    pub deleted: bool,
}

/// Editable state of the equipment-with-units form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EquipmentDraft {
    pub name: String,
    pub description: String,
    pub make_id: Option<i64>,
    pub type_id: Option<i64>,
    pub units: Vec<UnitDraft>,
}

impl EquipmentDraft {
    /// Prefill the form from an existing record.
    #[must_use]
    pub fn from_equipment(equipment: &Equipment) -> Self {
        Self {
            name: equipment.name.clone(),
            description: equipment.description.clone(),
            make_id: equipment.make_id.or_else(|| equipment.make.as_ref().map(|m| m.make_id).filter(|&id| id > 0)),
            type_id: equipment
                .type_id
                .or_else(|| equipment.equipment_type.as_ref().map(|t| t.equipment_type_id)),
            units: equipment
                .units
                .iter()
                .map(|unit| UnitDraft {
                    equipment_unit_id: Some(unit.equipment_unit_id),
                    serial_number: unit.serial_number.to_string(),
                    state: unit.state,
                    acquired_at: unit.acquired_at.get(..10).unwrap_or(&unit.acquired_at).to_owned(),
                    organization_id: unit
                        .organization_id
                        .or_else(|| unit.organization.as_ref().map(|o| o.organization_id)),
                    location: unit.location.clone(),
                    deleted: false,
                })
                .collect(),
        }
    }
}

/// Field key of a unit-row input, e.g. `units.2.location`.
#[must_use]
pub fn unit_field(index: usize, field: &str) -> String {
    format!("units.{index}.{field}")
}

fn check_unit(index: usize, unit: &UnitDraft, errors: &mut FieldErrors) -> Option<UnitPayload> {
    let before = errors.len();
    let serial_number = unit.serial_number.trim().parse::<i64>().ok();
    if unit.serial_number.trim().is_empty() {
        errors.insert(unit_field(index, "serial_number"), "Serial number is required");
    } else if serial_number.is_none() {
        errors.insert(unit_field(index, "serial_number"), "Serial number must be an integer");
    }
    if !is_date(unit.acquired_at.trim()) {
        errors.insert(unit_field(index, "acquired_at"), "Acquisition date is invalid");
    }
    if unit.organization_id.is_none() {
        errors.insert(unit_field(index, "organization_id"), "Organization is required");
    }
    required(errors, &unit_field(index, "location"), &unit.location, "Location is required");

    if errors.len() != before {
        return None;
    }
    Some(UnitPayload {
        equipment_unit_id: unit.equipment_unit_id,
        serial_number: serial_number?,
        state: unit.state,
        acquired_at: unit.acquired_at.trim().to_owned(),
        organization_id: unit.organization_id?,
        location: unit.location.trim().to_owned(),
        deleted: unit.deleted,
    })
}

/// # Errors
///
/// Field errors for the equipment fields and for every invalid unit row,
/// keyed with [`unit_field`].
pub fn equipment(draft: &EquipmentDraft) -> Result<EquipmentPayload, FieldErrors> {
    let mut errors = FieldErrors::default();
    required(&mut errors, "name", &draft.name, "Name is required");
    bounded(&mut errors, "name", &draft.name, NAME_MAX);
    required(&mut errors, "description", &draft.description, "Description is required");
    bounded(&mut errors, "description", &draft.description, DESCRIPTION_MAX);
    if draft.make_id.is_none() {
        errors.insert("make_id", "Make is required");
    }
    if draft.type_id.is_none() {
        errors.insert("type_id", "Type is required");
    }

    let units: Vec<UnitPayload> = draft
        .units
        .iter()
        .enumerate()
        .filter_map(|(index, unit)| check_unit(index, unit, &mut errors))
        .collect();

    match (draft.make_id, draft.type_id) {
        (Some(make_id), Some(type_id)) if errors.is_empty() => Ok(EquipmentPayload {
            name: draft.name.trim().to_owned(),
            description: draft.description.trim().to_owned(),
            make_id,
            type_id,
            units,
        }),
        _ => Err(errors),
    }
}

/// Maintenance window from two dates.
///
/// # Errors
///
/// Both dates must be valid and the window must not end before it starts.
pub fn maintenance_window(started_at: &str, ended_at: &str) -> Result<(String, String), FieldErrors> {
    let mut errors = FieldErrors::default();
    let (start, end) = (started_at.trim(), ended_at.trim());
    if !is_date(start) {
        errors.insert("started_at", "Start date is invalid");
    }
    if !is_date(end) {
        errors.insert("ended_at", "End date is invalid");
    }
    // ISO dates order lexicographically.
    if errors.is_empty() && end < start {
        errors.insert("ended_at", "End date is before the start date");
    }
    errors.finish(|| (start.to_owned(), end.to_owned()))
}
