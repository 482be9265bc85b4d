use super::*;
use crate::net::error::classify;

#[test]
fn endpoints_match_api_routes() {
    assert_eq!(LOGIN_ENDPOINT, "/auth/login");
    assert_eq!(REGISTER_ENDPOINT, "/auth/register");
    assert_eq!(PROFILE_ENDPOINT, "/auth/profile");
}

#[test]
fn login_response_decodes_token_and_user() {
    let body = serde_json::json!({
        "token": "tok-1",
        "user": { "userId": 1, "username": "alice", "email": "a@f.test", "roles": [{ "roleId": 2, "name": "employee" }] }
    });
    let response: AuthResponse = serde_json::from_value(body).expect("response");
    assert_eq!(response.token, "tok-1");
    assert_eq!(response.user.map(|u| u.username), Some("alice".to_owned()));
    assert_eq!(response.message, None);
}

#[test]
fn register_response_may_omit_user() {
    let body = serde_json::json!({ "token": "tok-2", "message": "created" });
    let response: AuthResponse = serde_json::from_value(body).expect("response");
    assert_eq!(response.token, "tok-2");
    assert!(response.user.is_none());
    assert_eq!(response.message.as_deref(), Some("created"));
}

#[test]
fn stale_profile_token_classifies_as_unauthorized() {
    assert_eq!(classify(RequestKind::Read, 401, ""), ApiError::Unauthorized);
}
