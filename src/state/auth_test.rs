use super::*;
use crate::net::types::UserRole;

fn user(name: &str, roles: &[RoleName]) -> User {
    User {
        id: 7,
        username: name.to_owned(),
        email: format!("{name}@formotex.test"),
        roles: roles.iter().map(|&name| UserRole { role_id: None, name }).collect(),
        created_at: None,
        updated_at: None,
        deleted_at: None,
    }
}

fn signed_in(roles: &[RoleName]) -> AuthState {
    let mut state = AuthState::default();
    let ticket = state.set_token(Some("tok".to_owned())).expect("ticket");
    assert!(state.resolve_session(&ticket, Ok(user("alice", roles))));
    state
}

#[test]
fn no_token_is_unauthenticated() {
    let state = AuthState::default();
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
    assert!(!state.is_authenticated());
    assert!(!state.loading());
}

#[test]
fn pending_profile_is_loading() {
    let mut state = AuthState::default();
    state.set_token(Some("tok".to_owned()));
    assert_eq!(state.status(), AuthStatus::Loading);
    assert!(state.loading());
    assert!(!state.is_authenticated());
}

#[test]
fn resolved_profile_is_authenticated_with_role_flags() {
    let state = signed_in(&[RoleName::Employee]);
    assert_eq!(state.status(), AuthStatus::Authenticated);
    assert!(state.is_authenticated());
    assert!(state.is_employee());
    assert!(!state.is_admin());

    let admin = signed_in(&[RoleName::Admin, RoleName::Employee]);
    assert!(admin.is_admin());
    assert!(admin.is_employee());
}

#[test]
fn user_without_roles_has_no_flags() {
    let state = signed_in(&[]);
    assert_eq!(state.status(), AuthStatus::Authenticated);
    assert!(!state.has_known_role());
}

#[test]
fn unknown_role_is_not_a_known_role() {
    let state = signed_in(&[RoleName::Unknown]);
    assert!(!state.is_admin());
    assert!(!state.is_employee());
    assert!(!state.has_known_role());
}

#[test]
fn clearing_token_hides_cached_user_immediately() {
    let mut state = signed_in(&[RoleName::Admin]);
    assert_eq!(state.set_token(None), None);
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
    assert!(state.user().is_none());
    assert!(!state.is_admin());
}

#[test]
fn sign_out_during_profile_fetch_never_authenticates() {
    let mut state = AuthState::default();
    let ticket = state.set_token(Some("tok".to_owned())).expect("ticket");
    state.set_token(None);

    assert!(!state.resolve_session(&ticket, Ok(user("alice", &[RoleName::Admin]))));
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
    assert!(state.user().is_none());
}

#[test]
fn token_swap_discards_previous_users_profile() {
    let mut state = AuthState::default();
    let first = state.set_token(Some("alice-token".to_owned())).expect("ticket");
    let second = state.set_token(Some("bob-token".to_owned())).expect("ticket");

    assert!(!state.resolve_session(&first, Ok(user("alice", &[RoleName::Admin]))));
    assert_eq!(state.status(), AuthStatus::Loading);

    assert!(state.resolve_session(&second, Ok(user("bob", &[RoleName::Employee]))));
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("bob"));
    assert!(!state.is_admin());
}

#[test]
fn rejected_token_resolves_to_unauthenticated() {
    let mut state = AuthState::default();
    let ticket = state.set_token(Some("stale".to_owned())).expect("ticket");
    state.resolve_session(&ticket, Err(ApiError::Unauthorized));
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
    assert!(!state.loading());
}

#[test]
fn network_failure_on_first_fetch_is_unauthenticated() {
    let mut state = AuthState::default();
    let ticket = state.set_token(Some("tok".to_owned())).expect("ticket");
    state.resolve_session(&ticket, Err(ApiError::Network { message: "offline".to_owned() }));
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
}

#[test]
fn refetch_keeps_session_authenticated() {
    let mut state = signed_in(&[RoleName::Employee]);
    let ticket = state.refetch().expect("ticket");
    assert_eq!(state.status(), AuthStatus::Authenticated);

    let mut promoted = user("alice", &[RoleName::Employee, RoleName::Admin]);
    promoted.email = "alice@new.test".to_owned();
    assert!(state.resolve_session(&ticket, Ok(promoted)));
    assert!(state.is_admin());
}

#[test]
fn signing_out_twice_equals_once() {
    let mut once = signed_in(&[RoleName::Employee]);
    once.set_token(None);
    let mut twice = signed_in(&[RoleName::Employee]);
    twice.set_token(None);
    assert_eq!(twice.set_token(None), None);
    assert_eq!(once, twice);
}

#[test]
fn blank_token_counts_as_signed_out() {
    let mut state = AuthState::default();
    assert_eq!(state.set_token(Some("  ".to_owned())), None);
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
}

#[test]
fn alice_signs_in_as_employee() {
    let mut state = AuthState::default();
    let ticket = state.set_token(Some("alice-token".to_owned())).expect("ticket");
    assert_eq!(ticket.key(), "alice-token");
    assert_eq!(state.status(), AuthStatus::Loading);

    state.resolve_session(&ticket, Ok(user("alice", &[RoleName::Employee])));
    assert_eq!(state.status(), AuthStatus::Authenticated);
    assert!(!state.is_admin());
    assert!(state.is_employee());
}

#[test]
fn status_precedence_table() {
    assert_eq!(derive_status(false, true, true), AuthStatus::Unauthenticated);
    assert_eq!(derive_status(true, false, false), AuthStatus::Loading);
    assert_eq!(derive_status(true, true, true), AuthStatus::Authenticated);
    assert_eq!(derive_status(true, true, false), AuthStatus::Unauthenticated);
}
