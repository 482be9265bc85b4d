use super::*;

#[test]
fn organization_path_appends_id() {
    assert_eq!(organization_path(12), "/organizations/12");
}

#[test]
fn organization_payload_serializes_location() {
    let payload = OrganizationPayload { name: "Acme".to_owned(), location: "Rosario".to_owned() };
    assert_eq!(
        serde_json::to_value(&payload).expect("json"),
        serde_json::json!({ "name": "Acme", "location": "Rosario" })
    );
}
