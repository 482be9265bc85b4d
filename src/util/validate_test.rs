use super::*;
use crate::net::types::{EquipmentUnit, Make, Organization};

fn account(password: &str, repeat: &str) -> AccountForm {
    AccountForm {
        username: " alice ".to_owned(),
        email: "alice@formotex.test".to_owned(),
        password: password.to_owned(),
        repeat_password: repeat.to_owned(),
    }
}

fn unit_draft() -> UnitDraft {
    UnitDraft {
        equipment_unit_id: None,
        serial_number: "1042".to_owned(),
        state: EquipmentState::Ok,
        acquired_at: "2024-03-01".to_owned(),
        organization_id: Some(2),
        location: "Depot A".to_owned(),
        deleted: false,
    }
}

fn equipment_draft() -> EquipmentDraft {
    EquipmentDraft {
        name: "ThinkPad T14".to_owned(),
        description: "14 inch laptop".to_owned(),
        make_id: Some(1),
        type_id: Some(3),
        units: vec![unit_draft()],
    }
}

#[test]
fn sign_in_requires_both_fields() {
    let errors = sign_in("  ", "").expect_err("invalid");
    assert!(errors.get("username").is_some());
    assert!(errors.get("password").is_some());
}

#[test]
fn sign_in_trims_username_only() {
    let params = sign_in(" alice ", " Secr3t! ").expect("valid");
    assert_eq!(params.name, "alice");
    assert_eq!(params.password, " Secr3t! ");
}

#[test]
fn password_rules_are_checked_in_order() {
    assert_eq!(password_problem("secr3t!"), Some("Password needs at least one uppercase letter"));
    assert_eq!(password_problem("SECR3T!"), Some("Password needs at least one lowercase letter"));
    assert_eq!(password_problem("Secret!"), Some("Password needs at least one number"));
    assert_eq!(password_problem("Secr3t"), Some("Password needs at least one of !@#$%^&*"));
    assert_eq!(password_problem("Secr3t!"), None);
}

#[test]
fn sign_up_registers_employee() {
    let params = sign_up(&account("Secr3t!", "Secr3t!")).expect("valid");
    assert_eq!(params.username, "alice");
    assert_eq!(params.roles, vec![RoleName::Employee]);
}

#[test]
fn sign_up_rejects_mismatched_passwords() {
    let errors = sign_up(&account("Secr3t!", "Secr3t?")).expect_err("invalid");
    assert_eq!(errors.get("password"), Some("Passwords do not match"));
}

#[test]
fn sign_up_rejects_bad_email() {
    let mut form = account("Secr3t!", "Secr3t!");
    form.email = "alice@".to_owned();
    let errors = sign_up(&form).expect_err("invalid");
    assert_eq!(errors.get("email"), Some("Email is invalid"));
}

#[test]
fn email_shape_check() {
    assert!(is_email("a@b.co"));
    assert!(!is_email("a@b"));
    assert!(!is_email("@b.co"));
    assert!(!is_email("a b@c.co"));
    assert!(!is_email("a@b@c.co"));
}

#[test]
fn new_user_keeps_chosen_roles() {
    let params = new_user(&account("Secr3t!", "Secr3t!"), &[RoleName::Admin, RoleName::Employee]).expect("valid");
    assert_eq!(params.roles, vec![RoleName::Admin, RoleName::Employee]);
}

#[test]
fn profile_allows_blank_password() {
    let update = profile(4, &account("", "")).expect("valid");
    assert_eq!(update.password, None);
    assert_eq!(update.user_id, 4);
}

#[test]
fn profile_checks_new_password() {
    assert!(profile(4, &account("weak", "weak")).is_err());
    assert!(profile(4, &account("Secr3t!", "")).is_err());
    assert_eq!(profile(4, &account("Secr3t!", "Secr3t!")).expect("valid").password.as_deref(), Some("Secr3t!"));
}

#[test]
fn catalog_entry_requires_fields_and_bounds_name() {
    assert!(catalog_entry("HP", "Printers and laptops").is_ok());
    let errors = catalog_entry("", "").expect_err("invalid");
    assert_eq!(errors.len(), 2);
    let long = "x".repeat(NAME_MAX + 1);
    assert!(catalog_entry(&long, "d").expect_err("invalid").get("name").is_some());
}

#[test]
fn organization_requires_location() {
    let errors = organization("Acme", " ").expect_err("invalid");
    assert_eq!(errors.get("location"), Some("Location is required"));
}

#[test]
fn date_check_accepts_input_date_format() {
    assert!(is_date("2024-03-01"));
    assert!(!is_date("2024-3-1"));
    assert!(!is_date("2024-13-01"));
    assert!(!is_date("01/03/2024"));
    assert!(!is_date(""));
}

#[test]
fn equipment_builds_payload() {
    let payload = equipment(&equipment_draft()).expect("valid");
    assert_eq!(payload.make_id, 1);
    assert_eq!(payload.type_id, 3);
    assert_eq!(payload.units.len(), 1);
    assert_eq!(payload.units[0].serial_number, 1042);
    assert_eq!(payload.units[0].equipment_unit_id, None);
}

#[test]
fn equipment_requires_make_and_type() {
    let mut draft = equipment_draft();
    draft.make_id = None;
    draft.type_id = None;
    let errors = equipment(&draft).expect_err("invalid");
    assert!(errors.get("make_id").is_some());
    assert!(errors.get("type_id").is_some());
}

#[test]
fn equipment_bounds_description() {
    let mut draft = equipment_draft();
    draft.description = "x".repeat(DESCRIPTION_MAX + 1);
    assert!(equipment(&draft).expect_err("invalid").get("description").is_some());
}

#[test]
fn unit_errors_are_keyed_by_row() {
    let mut draft = equipment_draft();
    let mut bad = unit_draft();
    bad.serial_number = "12a".to_owned();
    bad.location = String::new();
    bad.organization_id = None;
    draft.units.push(bad);

    let errors = equipment(&draft).expect_err("invalid");
    assert_eq!(errors.get(&unit_field(1, "serial_number")), Some("Serial number must be an integer"));
    assert!(errors.get(&unit_field(1, "location")).is_some());
    assert!(errors.get(&unit_field(1, "organization_id")).is_some());
    assert!(errors.get(&unit_field(0, "location")).is_none());
}

#[test]
fn draft_prefills_from_existing_equipment() {
    let existing = Equipment {
        equipment_id: 9,
        name: "LaserJet".to_owned(),
        description: "Printer".to_owned(),
        type_id: Some(2),
        equipment_type: None,
        make_id: None,
        make: Some(Make { make_id: 5, name: "HP".to_owned(), description: String::new() }),
        units: vec![EquipmentUnit {
            equipment_unit_id: 31,
            serial_number: 777,
            equipment_id: Some(9),
            state: EquipmentState::NeedsRepair,
            acquired_at: "2023-11-05T00:00:00.000Z".to_owned(),
            organization_id: None,
            organization: Some(Organization { organization_id: 4, name: "Acme".to_owned(), location: "BA".to_owned() }),
            location: "Office".to_owned(),
            equipment: None,
        }],
    };

    let draft = EquipmentDraft::from_equipment(&existing);
    assert_eq!(draft.make_id, Some(5));
    assert_eq!(draft.type_id, Some(2));
    let unit = &draft.units[0];
    assert_eq!(unit.equipment_unit_id, Some(31));
    assert_eq!(unit.serial_number, "777");
    assert_eq!(unit.acquired_at, "2023-11-05");
    assert_eq!(unit.organization_id, Some(4));

    let payload = equipment(&draft).expect("valid");
    assert_eq!(payload.units[0].equipment_unit_id, Some(31));
}

#[test]
fn maintenance_window_must_be_ordered() {
    assert!(maintenance_window("2024-06-01", "2024-06-09").is_ok());
    assert!(maintenance_window("2024-06-01", "2024-06-01").is_ok());
    let errors = maintenance_window("2024-06-09", "2024-06-01").expect_err("invalid");
    assert!(errors.get("ended_at").is_some());
    assert!(maintenance_window("", "2024-06-01").is_err());
}
