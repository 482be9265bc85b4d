use super::*;
use crate::net::types::{RoleName, UserRole};
use crate::state::auth::AuthStatus;
use crate::util::storage::{MemoryStorage, TOKEN_KEY};

fn employee() -> User {
    User {
        id: 3,
        username: "bruno".to_owned(),
        email: "bruno@formotex.test".to_owned(),
        roles: vec![UserRole { role_id: None, name: RoleName::Employee }],
        created_at: None,
        updated_at: None,
        deleted_at: None,
    }
}

fn persisted(token: &str) -> MemoryStorage {
    let backend = MemoryStorage::default();
    backend.set(TOKEN_KEY, token).expect("set");
    backend
}

#[test]
fn open_issues_fetch_for_persisted_token() {
    let (session, ticket) = Session::open(persisted("stored"));
    assert_eq!(ticket.as_ref().map(QueryTicket::key), Some("stored"));
    assert_eq!(session.state().status(), AuthStatus::Loading);
}

#[test]
fn open_without_token_is_unauthenticated() {
    let (session, ticket) = Session::open(MemoryStorage::default());
    assert!(ticket.is_none());
    assert_eq!(session.state().status(), AuthStatus::Unauthenticated);
}

#[test]
fn sign_in_persists_token_and_fetches_with_it() {
    let (mut session, _) = Session::open(MemoryStorage::default());
    let ticket = session.store_token(Some("fresh".to_owned())).expect("ticket");
    assert_eq!(ticket.key(), "fresh");
    assert_eq!(session.store().backend().get(TOKEN_KEY), Ok(Some("fresh".to_owned())));
    assert_eq!(session.state().token(), Some("fresh"));

    assert!(session.resolve(&ticket, Ok(employee())));
    assert_eq!(session.state().status(), AuthStatus::Authenticated);
}

#[test]
fn sign_out_clears_backend_and_is_immediately_unauthenticated() {
    let (mut session, ticket) = Session::open(persisted("stored"));
    let ticket = ticket.expect("ticket");
    assert!(session.resolve(&ticket, Ok(employee())));

    assert!(session.sign_out());
    assert_eq!(session.store().backend().get(TOKEN_KEY), Ok(None));
    assert_eq!(session.state().status(), AuthStatus::Unauthenticated);
    assert!(session.state().user().is_none());
}

#[test]
fn second_sign_out_changes_nothing() {
    let (mut session, _) = Session::open(persisted("stored"));
    assert!(session.sign_out());
    assert!(!session.sign_out());
    assert_eq!(session.store().backend().get(TOKEN_KEY), Ok(None));
    assert_eq!(session.state().status(), AuthStatus::Unauthenticated);
}

#[test]
fn response_for_signed_out_token_is_discarded() {
    let (mut session, ticket) = Session::open(persisted("stored"));
    session.sign_out();
    assert!(!session.resolve(&ticket.expect("ticket"), Ok(employee())));
    assert_eq!(session.state().status(), AuthStatus::Unauthenticated);
}

#[test]
fn blank_token_is_stored_as_absent() {
    let (mut session, _) = Session::open(MemoryStorage::default());
    assert!(session.store_token(Some("  ".to_owned())).is_none());
    assert_eq!(session.store().read(), None);
    assert_eq!(session.state().token(), None);
}

#[test]
fn signing_in_again_with_same_token_rereads_profile() {
    let (mut session, ticket) = Session::open(persisted("stored"));
    let ticket = ticket.expect("ticket");
    assert!(session.resolve(&ticket, Err(ApiError::Network { message: "down".to_owned() })));
    assert_eq!(session.state().status(), AuthStatus::Unauthenticated);

    let retry = session.store_token(Some("stored".to_owned())).expect("refetch");
    assert_eq!(retry.key(), "stored");
    assert!(session.resolve(&retry, Ok(employee())));
    assert_eq!(session.state().status(), AuthStatus::Authenticated);
}
