use super::*;
use crate::net::types::UnitPayload;

fn unit(id: Option<i64>, serial: i64, deleted: bool) -> UnitPayload {
    UnitPayload {
        equipment_unit_id: id,
        serial_number: serial,
        state: EquipmentState::Ok,
        acquired_at: "2024-01-01".to_owned(),
        organization_id: 1,
        location: "Depot".to_owned(),
        deleted,
    }
}

fn payload(units: Vec<UnitPayload>) -> EquipmentPayload {
    EquipmentPayload {
        name: "ThinkPad".to_owned(),
        description: "Laptop".to_owned(),
        make_id: 1,
        type_id: 2,
        units,
    }
}

#[test]
fn split_keeps_persisted_units_in_update() {
    let (body, added) = split_new_units(payload(vec![unit(Some(5), 1, false), unit(Some(6), 2, true)]), 9, &[0, 1]);
    assert_eq!(body.units.len(), 2);
    assert!(body.units[1].deleted);
    assert!(added.is_empty());
}

#[test]
fn split_moves_new_units_to_unit_endpoint() {
    let (body, added) = split_new_units(payload(vec![unit(Some(5), 1, false), unit(None, 2, false)]), 9, &[3, 4]);
    assert_eq!(body.units.len(), 1);
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].row, 4);
    assert_eq!(added[0].unit.equipment_id, 9);
    assert_eq!(added[0].unit.unit.serial_number, 2);
}

#[test]
fn split_drops_new_units_marked_deleted() {
    let (_, added) = split_new_units(payload(vec![unit(None, 3, true)]), 9, &[0]);
    assert!(added.is_empty());
}

#[test]
fn retry_after_partial_save_only_posts_remaining_units() {
    let rows = vec![(0, unit(Some(5), 1, false)), (1, unit(None, 7, false)), (2, unit(None, 8, false))];
    let keys: Vec<usize> = rows.iter().map(|(key, _)| *key).collect();
    let units = rows.iter().map(|(_, u)| u.clone()).collect();
    let (_, added) = split_new_units(payload(units), 9, &keys);
    assert_eq!(added.iter().map(|p| p.row).collect::<Vec<_>>(), [1, 2]);

    // Serial 7 was created, serial 8 failed: the saved row leaves the form.
    let saved = added[0].row;
    let remaining: Vec<_> = rows.into_iter().filter(|(key, _)| *key != saved).collect();
    let keys: Vec<usize> = remaining.iter().map(|(key, _)| *key).collect();
    let units = remaining.into_iter().map(|(_, u)| u).collect();
    let (body, retry) = split_new_units(payload(units), 9, &keys);
    assert_eq!(body.units.len(), 1);
    assert_eq!(retry.len(), 1);
    assert_eq!(retry[0].unit.unit.serial_number, 8);
}

#[test]
fn parse_id_ignores_placeholder_option() {
    assert_eq!(parse_id(""), None);
    assert_eq!(parse_id(" 12 "), Some(12));
    assert_eq!(parse_id("x"), None);
}
