//! Route guards gating pages on session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wraps every dashboard route in [`PrivateRoute`] and the login and
//! registration routes in [`PublicRoute`]. Both re-evaluate whenever the auth
//! status changes and have no side effects beyond navigation.
//!
//! DESIGN
//! ======
//! The decision is a pure function of status and role flags
//! ([`private_outcome`], [`public_outcome`]); the components only map the
//! outcome to a spinner, a replace-navigation, or the children. An
//! authenticated user who lacks the admin role is sent to `/forbidden`
//! rather than back to the login form.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::spinner::Spinner;
use crate::state::auth::AuthStatus;
use crate::util::auth::use_auth;

pub const LOGIN_PATH: &str = "/auth/login";
pub const LANDING_PATH: &str = "/dashboard";
pub const FORBIDDEN_PATH: &str = "/forbidden";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Loading,
    Redirect(&'static str),
    Render,
}

#[must_use]
pub fn private_outcome(status: AuthStatus, needs_admin: bool, is_admin: bool) -> GuardOutcome {
    match status {
        AuthStatus::Loading => GuardOutcome::Loading,
        AuthStatus::Unauthenticated => GuardOutcome::Redirect(LOGIN_PATH),
        AuthStatus::Authenticated if needs_admin && !is_admin => GuardOutcome::Redirect(FORBIDDEN_PATH),
        AuthStatus::Authenticated => GuardOutcome::Render,
    }
}

/// Signed-in users with a usable role are sent to the dashboard.
#[must_use]
pub fn public_outcome(status: AuthStatus, has_known_role: bool) -> GuardOutcome {
    match status {
        AuthStatus::Loading => GuardOutcome::Loading,
        AuthStatus::Authenticated if has_known_role => GuardOutcome::Redirect(LANDING_PATH),
        AuthStatus::Authenticated | AuthStatus::Unauthenticated => GuardOutcome::Render,
    }
}

#[component]
pub fn PrivateRoute(#[prop(optional)] needs_admin: bool, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let outcome = Memo::new(move |_| private_outcome(auth.status(), needs_admin, auth.is_admin()));
    guarded(outcome, children)
}

#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let outcome = Memo::new(move |_| public_outcome(auth.status(), auth.has_known_role()));
    guarded(outcome, children)
}

fn guarded(outcome: Memo<GuardOutcome>, children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        if let GuardOutcome::Redirect(path) = outcome.get() {
            log::debug!("route guard redirecting to {path}");
            navigate(path, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    view! {
        <Show
            when=move || outcome.get() == GuardOutcome::Render
            fallback=|| view! { <Spinner centered=true/> }
        >
            {children()}
        </Show>
    }
}
