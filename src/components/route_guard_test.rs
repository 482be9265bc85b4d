use super::*;

#[test]
fn private_waits_while_loading() {
    assert_eq!(private_outcome(AuthStatus::Loading, false, false), GuardOutcome::Loading);
    assert_eq!(private_outcome(AuthStatus::Loading, true, true), GuardOutcome::Loading);
}

#[test]
fn private_sends_signed_out_users_to_login() {
    assert_eq!(private_outcome(AuthStatus::Unauthenticated, false, false), GuardOutcome::Redirect(LOGIN_PATH));
    assert_eq!(private_outcome(AuthStatus::Unauthenticated, true, true), GuardOutcome::Redirect(LOGIN_PATH));
}

#[test]
fn private_admin_route_rejects_non_admins() {
    assert_eq!(private_outcome(AuthStatus::Authenticated, true, false), GuardOutcome::Redirect(FORBIDDEN_PATH));
    assert_eq!(private_outcome(AuthStatus::Authenticated, true, true), GuardOutcome::Render);
}

#[test]
fn private_renders_for_any_signed_in_user() {
    assert_eq!(private_outcome(AuthStatus::Authenticated, false, false), GuardOutcome::Render);
}

#[test]
fn public_redirects_signed_in_users_away() {
    assert_eq!(public_outcome(AuthStatus::Authenticated, true), GuardOutcome::Redirect(LANDING_PATH));
}

#[test]
fn public_renders_for_signed_out_and_roleless_users() {
    assert_eq!(public_outcome(AuthStatus::Unauthenticated, false), GuardOutcome::Render);
    assert_eq!(public_outcome(AuthStatus::Authenticated, false), GuardOutcome::Render);
}

#[test]
fn public_waits_while_loading() {
    assert_eq!(public_outcome(AuthStatus::Loading, true), GuardOutcome::Loading);
}
