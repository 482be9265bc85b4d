use super::*;

const BODY: &str = r#"{"message":"Name already taken"}"#;

#[test]
fn server_message_reads_flat_body() {
    assert_eq!(server_message(BODY), Some("Name already taken".to_owned()));
}

#[test]
fn server_message_reads_data_envelope() {
    let body = r#"{"status":409,"data":{"message":"in use"}}"#;
    assert_eq!(server_message(body), Some("in use".to_owned()));
}

#[test]
fn server_message_ignores_garbage_and_blank() {
    assert_eq!(server_message("<html>oops</html>"), None);
    assert_eq!(server_message(r#"{"message":"  "}"#), None);
    assert_eq!(server_message(""), None);
}

#[test]
fn auth_rejections_are_credential_errors() {
    assert_eq!(
        classify(RequestKind::Auth, 401, r#"{"message":"Bad password"}"#),
        ApiError::Credential { message: "Bad password".to_owned() }
    );
    assert!(matches!(classify(RequestKind::Auth, 400, ""), ApiError::Credential { .. }));
}

#[test]
fn unauthorized_outside_auth_endpoints() {
    assert_eq!(classify(RequestKind::Read, 401, ""), ApiError::Unauthorized);
    assert_eq!(classify(RequestKind::Write, 403, ""), ApiError::Forbidden);
    assert_eq!(classify(RequestKind::Read, 404, ""), ApiError::NotFound);
}

#[test]
fn conflict_depends_on_request_kind() {
    assert_eq!(
        classify(RequestKind::Write, 409, BODY),
        ApiError::Conflict { message: "Name already taken".to_owned() }
    );
    assert!(matches!(classify(RequestKind::Delete, 409, BODY), ApiError::ForeignKeyConflict { .. }));
}

#[test]
fn server_errors_are_network_errors() {
    let err = classify(RequestKind::Read, 503, "");
    assert!(err.is_network());
    assert_eq!(err, ApiError::Network { message: "request failed: 503".to_owned() });
}

#[test]
fn other_client_errors_are_validation_errors() {
    assert_eq!(
        classify(RequestKind::Write, 422, r#"{"message":"serialNumber must be unique"}"#),
        ApiError::Validation { status: 422, message: "serialNumber must be unique".to_owned() }
    );
}

#[test]
fn unexpected_status_is_reported_as_malformed() {
    assert!(matches!(classify(RequestKind::Read, 302, ""), ApiError::Serialization { .. }));
}

#[test]
fn user_messages_distinguish_conflict_kinds() {
    let conflict = ApiError::Conflict { message: String::new() }.user_message();
    let dangling = ApiError::ForeignKeyConflict { message: String::new() }.user_message();
    assert_ne!(conflict, dangling);
    assert!(conflict.contains("already in use"));
}

#[test]
fn credential_user_message_passes_server_text_through() {
    let err = ApiError::Credential { message: "User not found".to_owned() };
    assert_eq!(err.user_message(), "User not found");
    assert!(!err.is_network());
}

#[test]
fn taken_username_on_registration_is_a_conflict() {
    assert_eq!(
        classify(RequestKind::Auth, 409, r#"{"message":"Username taken"}"#),
        ApiError::Conflict { message: "Username taken".to_owned() }
    );
}
