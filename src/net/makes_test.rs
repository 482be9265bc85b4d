use super::*;

#[test]
fn make_path_appends_id() {
    assert_eq!(make_path(3), "/makes/3");
}

#[test]
fn make_list_decodes() {
    let makes: Vec<Make> = serde_json::from_value(serde_json::json!([
        { "makeId": 1, "name": "Lenovo", "description": "Laptops" },
        { "makeId": "2", "name": "HP" }
    ]))
    .expect("makes");
    assert_eq!(makes.len(), 2);
    assert_eq!(makes[1].make_id, 2);
    assert_eq!(makes[1].description, "");
}
