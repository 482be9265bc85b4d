//! The token store and the auth state, kept in step.
//!
//! DESIGN
//! ======
//! Every token change goes through [`Session::store_token`], which writes
//! the store first and then re-keys the session query with whatever the
//! store now holds. The two can therefore never disagree, including when
//! the store normalizes a blank token away.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::auth::AuthState;
use super::query::QueryTicket;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::util::storage::{KeyValueStore, TokenStore};

#[derive(Debug)]
pub struct Session<S> {
    store: TokenStore<S>,
    state: AuthState,
}

impl<S: KeyValueStore> Session<S> {
    /// Load the persisted token. Returns the profile fetch to issue for it.
    pub fn open(backend: S) -> (Self, Option<QueryTicket>) {
        let store = TokenStore::open(backend);
        let mut state = AuthState::default();
        let ticket = state.set_token(store.read());
        (Self { store, state }, ticket)
    }

    /// Persist `token` (or clear it) and re-key the session.
    ///
    /// Storing the token already held re-reads the profile, so signing in
    /// again recovers a session whose last profile read failed.
    pub fn store_token(&mut self, token: Option<String>) -> Option<QueryTicket> {
        self.store.write(token);
        let token = self.store.read();
        let has_token = token.is_some();
        match self.state.set_token(token) {
            None if has_token => self.state.refetch(),
            ticket => ticket,
        }
    }

    /// Forget the token. Returns whether there was one.
    pub fn sign_out(&mut self) -> bool {
        let had_token = self.state.token().is_some();
        self.store_token(None);
        had_token
    }

    pub fn refetch(&mut self) -> Option<QueryTicket> {
        self.state.refetch()
    }

    /// Apply a profile response. Returns `false` if it was stale.
    pub fn resolve(&mut self, ticket: &QueryTicket, result: Result<User, ApiError>) -> bool {
        self.state.resolve_session(ticket, result)
    }

    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    #[must_use]
    pub fn store(&self) -> &TokenStore<S> {
        &self.store
    }
}
