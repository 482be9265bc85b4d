//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the sidebar and every data page read this state. The token
//! is the sole authority; the user is a projection fetched with it.
//!
//! DESIGN
//! ======
//! The token doubles as the key of the session query, so there is a single
//! place it lives. Status is evaluated in a fixed precedence order:
//!
//! 1. no token: `Unauthenticated`
//! 2. token, profile not answered yet: `Loading`
//! 3. token, profile answered with a user: `Authenticated`
//! 4. token, profile answered without a user (rejected token, network
//!    failure): `Unauthenticated`, so a dead token never leaves the app on
//!    an endless spinner.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::query::{KeyedQuery, QueryTicket};
use crate::net::error::ApiError;
use crate::net::types::{RoleName, User};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Unauthenticated,
    Loading,
    Authenticated,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    session: KeyedQuery<User>,
}

impl AuthState {
    /// Replace the token. Returns the profile fetch to issue, if any.
    pub fn set_token(&mut self, token: Option<String>) -> Option<QueryTicket> {
        let token = token.filter(|t| !t.trim().is_empty());
        self.session.set_key(token)
    }

    /// Re-read the profile for the current token.
    pub fn refetch(&mut self) -> Option<QueryTicket> {
        self.session.refetch()
    }

    /// Apply a profile response. Returns `false` if it was stale.
    pub fn resolve_session(&mut self, ticket: &QueryTicket, result: Result<User, ApiError>) -> bool {
        self.session.resolve(ticket, result)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.key()
    }

    /// The signed-in user. Never reported without a token.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.token()?;
        self.session.data()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.session.is_loading()
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        derive_status(self.token().is_some(), self.session.is_settled(), self.user().is_some())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.user().is_some() && !self.loading()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(RoleName::Admin)
    }

    #[must_use]
    pub fn is_employee(&self) -> bool {
        self.has_role(RoleName::Employee)
    }

    /// Holds at least one role this client knows how to serve.
    #[must_use]
    pub fn has_known_role(&self) -> bool {
        self.is_admin() || self.is_employee()
    }

    fn has_role(&self, role: RoleName) -> bool {
        self.user().is_some_and(|user| user.has_role(role))
    }
}

/// Status precedence over the three facts that decide it.
#[must_use]
pub fn derive_status(has_token: bool, settled: bool, has_user: bool) -> AuthStatus {
    match (has_token, settled, has_user) {
        (true, false, _) => AuthStatus::Loading,
        (true, true, true) => AuthStatus::Authenticated,
        (false, _, _) | (true, true, false) => AuthStatus::Unauthenticated,
    }
}
