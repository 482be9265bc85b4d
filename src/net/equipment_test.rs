use super::*;

#[test]
fn equipment_path_appends_id() {
    assert_eq!(equipment_path(9), "/equipment/9");
}

#[test]
fn unit_actions_are_nested_under_units() {
    assert_eq!(unit_action_path(4, "maintenance"), "/equipment/units/4/maintenance");
    assert_eq!(unit_action_path(4, "delivery"), "/equipment/units/4/delivery");
}

#[test]
fn maintenance_request_uses_camel_case() {
    let request = MaintenanceRequest { started_at: "2024-06-01".to_owned(), ended_at: "2024-06-09".to_owned() };
    assert_eq!(
        serde_json::to_value(&request).expect("json"),
        serde_json::json!({ "startedAt": "2024-06-01", "endedAt": "2024-06-09" })
    );
}

#[test]
fn delivery_request_uses_camel_case() {
    let request = DeliveryRequest { organization_id: 5 };
    assert_eq!(serde_json::to_value(&request).expect("json"), serde_json::json!({ "organizationId": 5 }));
}

#[test]
fn units_query_filters_by_trimmed_serial() {
    assert_eq!(units_query(None), "/equipment/units");
    assert_eq!(units_query(Some("  ")), "/equipment/units");
    assert_eq!(units_query(Some(" 1042 ")), "/equipment/units?serialNumber=1042");
}

#[test]
fn units_query_escapes_reserved_characters() {
    assert_eq!(units_query(Some("a&b c")), "/equipment/units?serialNumber=a%26b%20c");
}
