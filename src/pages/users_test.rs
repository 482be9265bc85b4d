use super::*;
use crate::net::types::UserRole;

fn user_with(roles: &[RoleName]) -> User {
    User {
        id: 1,
        username: "bob".to_owned(),
        email: "bob@formotex.test".to_owned(),
        roles: roles.iter().map(|&name| UserRole { role_id: None, name }).collect(),
        created_at: None,
        updated_at: None,
        deleted_at: None,
    }
}

#[test]
fn role_summary_lists_known_roles() {
    assert_eq!(role_summary(&user_with(&[RoleName::Admin, RoleName::Employee])), "Admin, Employee");
    assert_eq!(role_summary(&user_with(&[RoleName::Unknown])), "No roles");
    assert_eq!(role_summary(&user_with(&[])), "No roles");
}

#[test]
fn toggle_role_adds_and_removes() {
    assert_eq!(toggle_role(&[], RoleName::Employee, true), vec![RoleName::Employee]);
    assert_eq!(
        toggle_role(&[RoleName::Employee], RoleName::Admin, true),
        vec![RoleName::Admin, RoleName::Employee]
    );
    assert_eq!(toggle_role(&[RoleName::Admin, RoleName::Employee], RoleName::Admin, false), vec![RoleName::Employee]);
}

#[test]
fn toggle_role_drops_unassignable_roles() {
    assert_eq!(toggle_role(&[RoleName::Unknown], RoleName::Admin, true), vec![RoleName::Admin]);
}
