use super::*;

#[test]
fn rows_map_each_resource() {
    let make = Make { make_id: 1, name: "HP".to_owned(), description: "Printers".to_owned() };
    assert_eq!(CatalogRow::from(make), CatalogRow { id: 1, name: "HP".to_owned(), detail: "Printers".to_owned() });

    let org = Organization { organization_id: 4, name: "Acme".to_owned(), location: "Rosario".to_owned() };
    assert_eq!(CatalogRow::from(org).detail, "Rosario");

    let kind = EquipmentType { equipment_type_id: 2, name: "Laptop".to_owned(), description: String::new() };
    assert_eq!(CatalogRow::from(kind).id, 2);
}

#[test]
fn rows_keep_list_order() {
    let makes = vec![
        Make { make_id: 3, name: "Dell".to_owned(), description: "Laptops".to_owned() },
        Make { make_id: 1, name: "HP".to_owned(), description: "Printers".to_owned() },
    ];
    let mapped = rows(makes);
    assert_eq!(mapped.iter().map(|r| r.id).collect::<Vec<_>>(), [3, 1]);
    assert_eq!(mapped[1].detail, "Printers");
    assert!(rows(Vec::<Organization>::new()).is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn list_reports_request_failures() {
    let api = ApiClient::new(&crate::config::ApiConfig::default());
    for kind in [CatalogKind::EquipmentTypes, CatalogKind::Makes, CatalogKind::Organizations] {
        let result = futures::executor::block_on(kind.list(&api, "token"));
        assert!(matches!(result, Err(ApiError::Network { .. })));
    }
}

#[test]
fn organizations_use_location_field() {
    assert_eq!(CatalogKind::Organizations.detail_field(), "location");
    assert_eq!(CatalogKind::Makes.detail_field(), "description");
    let errors = CatalogKind::Organizations.validate("Acme", "").expect_err("invalid");
    assert!(errors.get("location").is_some());
}

#[test]
fn makes_and_types_require_description() {
    for kind in [CatalogKind::Makes, CatalogKind::EquipmentTypes] {
        let errors = kind.validate("HP", " ").expect_err("invalid");
        assert!(errors.get("description").is_some());
        assert_eq!(
            kind.validate(" HP ", "Printers"),
            Ok(CatalogInput::Entry(CatalogPayload { name: "HP".to_owned(), description: "Printers".to_owned() }))
        );
    }
}

#[test]
fn in_use_message_names_the_resource() {
    assert!(CatalogKind::Makes.in_use_message().contains("make"));
    assert!(CatalogKind::Organizations.in_use_message().contains("organization"));
}

#[test]
fn organizations_build_organization_body() {
    assert_eq!(
        CatalogKind::Organizations.validate("Acme", "Rosario"),
        Ok(CatalogInput::Organization(OrganizationPayload {
            name: "Acme".to_owned(),
            location: "Rosario".to_owned(),
        }))
    );
}
