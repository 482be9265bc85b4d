use super::*;
use crate::net::types::EquipmentUnit;

fn unit(id: i64, state: EquipmentState) -> EquipmentUnit {
    EquipmentUnit {
        equipment_unit_id: id,
        serial_number: 1000 + id,
        equipment_id: Some(1),
        state,
        acquired_at: "2024-01-01".to_owned(),
        organization_id: Some(1),
        organization: None,
        location: "Depot".to_owned(),
        equipment: None,
    }
}

fn equipment(units: Vec<EquipmentUnit>) -> Equipment {
    Equipment {
        equipment_id: 1,
        name: "ThinkPad".to_owned(),
        description: "Laptop".to_owned(),
        type_id: None,
        equipment_type: None,
        make_id: None,
        make: None,
        units,
    }
}

#[test]
fn summary_counts_units() {
    assert_eq!(unit_summary(&equipment(vec![])), "0 units");
    assert_eq!(unit_summary(&equipment(vec![unit(1, EquipmentState::Ok)])), "1 unit");
}

#[test]
fn summary_flags_units_needing_repair() {
    let units = vec![unit(1, EquipmentState::Ok), unit(2, EquipmentState::NeedsRepair), unit(3, EquipmentState::Delivered)];
    assert_eq!(unit_summary(&equipment(units)), "3 units (1 needs repair)");
}
