use super::*;
use crate::net::types::{EquipmentState, Organization, UnitEquipment};

fn movement(json: serde_json::Value) -> Movement {
    serde_json::from_value(json).expect("movement")
}

#[test]
fn maintenance_rows_show_the_window() {
    let row = ActivityRow::from(&movement(serde_json::json!({
        "movementId": 7,
        "unit": {
            "equipmentUnitId": 3,
            "serialNumber": 12345,
            "state": "in_maintenance",
            "acquiredAt": "2024-01-01",
            "location": "Lab"
        },
        "author": { "id": 1, "username": "ana", "email": "ana@formotex.com", "roles": [] },
        "type": { "name": "mantenimiento" },
        "details": { "startedAt": "2024-03-01T00:00:00.000Z", "endedAt": "2024-03-05T00:00:00.000Z" }
    })));
    assert_eq!(row.author, "ana");
    assert_eq!(row.unit, "12345");
    assert_eq!(row.kind, "Maintenance");
    assert_eq!(row.details, "From 2024-03-01 to 2024-03-05");
}

#[test]
fn rows_without_author_or_unit_fall_back() {
    let row = ActivityRow::from(&movement(serde_json::json!({
        "movementId": 8,
        "equipmentUnitId": 4,
        "type": { "name": "transport" }
    })));
    assert_eq!(row.author, "Unknown");
    assert_eq!(row.unit, "unit 4");
    assert_eq!(row.details, "");
}

#[test]
fn delivery_details_name_the_organization() {
    let details = MovementDetails::Delivery {
        organization: Organization { organization_id: 2, name: "Acme".to_owned(), location: "Cordoba".to_owned() },
    };
    assert_eq!(describe(&details), "Delivered to Acme");
}

#[test]
fn unit_label_includes_serial_name_and_state() {
    let unit = EquipmentUnit {
        equipment_unit_id: 3,
        serial_number: 555,
        equipment_id: Some(1),
        state: EquipmentState::NeedsRepair,
        acquired_at: "2024-01-01".to_owned(),
        organization_id: None,
        organization: None,
        location: "Depot".to_owned(),
        equipment: Some(UnitEquipment { name: "ThinkPad".to_owned() }),
    };
    assert_eq!(unit_label(&unit), "#555 ThinkPad (Needs repair)");
}

#[test]
fn maintenance_requires_unit_and_ordered_dates() {
    let form = RegistrationForm {
        unit_id: None,
        started_at: "2024-03-05".to_owned(),
        ended_at: "2024-03-01".to_owned(),
        organization_id: None,
    };
    let errors = validate_registration(RegistrationKind::Maintenance, &form).expect_err("invalid");
    assert!(errors.get("unit").is_some());
    assert!(errors.get("ended_at").is_some());
    assert!(errors.get("organization_id").is_none());
}

#[test]
fn maintenance_builds_request() {
    let form = RegistrationForm {
        unit_id: Some(3),
        started_at: "2024-03-01".to_owned(),
        ended_at: "2024-03-05".to_owned(),
        organization_id: None,
    };
    assert_eq!(
        validate_registration(RegistrationKind::Maintenance, &form),
        Ok(Registration::Maintenance {
            unit_id: 3,
            request: MaintenanceRequest { started_at: "2024-03-01".to_owned(), ended_at: "2024-03-05".to_owned() },
        })
    );
}

#[test]
fn delivery_ignores_dates_but_needs_organization() {
    let mut form = RegistrationForm { unit_id: Some(3), ..RegistrationForm::default() };
    let errors = validate_registration(RegistrationKind::Delivery, &form).expect_err("no org");
    assert_eq!(errors.len(), 1);
    assert!(errors.get("organization_id").is_some());

    form.organization_id = Some(9);
    assert_eq!(
        validate_registration(RegistrationKind::Delivery, &form),
        Ok(Registration::Delivery { unit_id: 3, request: DeliveryRequest { organization_id: 9 } })
    );
}
