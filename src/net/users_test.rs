use super::*;

#[test]
fn user_path_appends_id() {
    assert_eq!(user_path(4), "/users/4");
}

#[test]
fn user_list_envelope_decodes() {
    let body: UserList = serde_json::from_value(serde_json::json!({
        "users": [
            { "userId": 1, "username": "alice", "email": "a@f.test", "roles": [{ "roleId": 1, "name": "admin" }] },
            { "userId": 2, "username": "bob", "email": "b@f.test", "roles": [] }
        ]
    }))
    .expect("users");
    assert_eq!(body.users.len(), 2);
    assert!(body.users[0].has_role(crate::net::types::RoleName::Admin));
}

#[test]
fn user_envelope_decodes() {
    let body: UserEnvelope = serde_json::from_value(serde_json::json!({
        "user": { "userId": 2, "username": "bob", "email": "b@f.test", "roles": [] }
    }))
    .expect("user");
    assert_eq!(body.user.username, "bob");
}

#[test]
fn profile_update_omits_unchanged_password() {
    let body = ProfileUpdate {
        user_id: 3,
        username: "alice".to_owned(),
        email: "a@f.test".to_owned(),
        password: None,
    };
    assert_eq!(
        serde_json::to_value(&body).expect("json"),
        serde_json::json!({ "userId": 3, "username": "alice", "email": "a@f.test" })
    );
}
