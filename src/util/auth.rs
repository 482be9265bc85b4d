//! Auth context: the process-wide session handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`AuthContext`] at mount and provides it to the whole
//! tree. Guards, pages and list queries read it through [`use_auth`], so
//! there is exactly one token and one session per tab.
//!
//! DESIGN
//! ======
//! The token store and the [`AuthState`] live together in one
//! [`Session`] behind one signal, so a token write updates both at once.
//! Writing a token issues a profile fetch ticket; the fetch result goes back
//! through `Session::resolve`, which drops it if the token moved on while
//! the request was in flight. Requests carry the token explicitly, so
//! clearing it takes effect for the very next request.

use leptos::prelude::*;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{SignInParams, SignUpParams, User};
use crate::state::auth::{AuthState, AuthStatus};
use crate::state::query::QueryTicket;
use crate::state::session::Session;
use crate::util::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session<BrowserStorage>>,
    token: Memo<Option<String>>,
    api: StoredValue<ApiClient>,
}

impl AuthContext {
    /// Read the persisted token and start resolving its session.
    pub fn new(api: ApiClient) -> Self {
        let (initial, ticket) = Session::open(BrowserStorage);
        let session = RwSignal::new(initial);
        let token = Memo::new(move |_| session.with(|s| s.state().token().map(str::to_owned)));
        let ctx = Self { session, token, api: StoredValue::new(api) };
        if let Some(ticket) = ticket {
            ctx.dispatch(ticket);
        }
        ctx
    }

    fn dispatch(self, ticket: QueryTicket) {
        let api = self.api.get_value();
        let session = self.session;
        leptos::task::spawn_local(async move {
            let result = crate::net::auth::fetch_profile(&api, ticket.key()).await;
            match session.try_update(|s| s.resolve(&ticket, result)) {
                Some(true) => log::debug!("session resolved"),
                _ => log::debug!("discarded stale session response"),
            }
        });
    }

    fn store_token(self, token: Option<String>) {
        if let Some(ticket) = self.session.try_update(|s| s.store_token(token)).flatten() {
            self.dispatch(ticket);
        }
    }

    /// Exchange credentials for a token.
    ///
    /// # Errors
    ///
    /// [`ApiError::Credential`] for rejected credentials; token state is
    /// left untouched on any failure.
    pub async fn sign_in(self, params: SignInParams) -> Result<(), ApiError> {
        let api = self.api.get_value();
        let response = crate::net::auth::sign_in(&api, &params).await?;
        log::info!("signed in as {}", params.name);
        self.store_token(Some(response.token));
        Ok(())
    }

    /// Register and sign in with the returned token.
    ///
    /// # Errors
    ///
    /// [`ApiError::Conflict`] when the username or email is taken.
    pub async fn sign_up(self, params: SignUpParams) -> Result<(), ApiError> {
        let api = self.api.get_value();
        let response = crate::net::auth::sign_up(&api, &params).await?;
        log::info!("registered {}", params.username);
        self.store_token(Some(response.token));
        Ok(())
    }

    /// Forget the token. Local only; idempotent.
    pub fn sign_out(self) {
        if self.session.try_update(Session::sign_out) == Some(true) {
            log::info!("signed out");
        }
    }

    /// Re-read the profile, e.g. after editing the signed-in user.
    pub fn refetch(self) {
        if let Some(ticket) = self.session.try_update(Session::refetch).flatten() {
            self.dispatch(ticket);
        }
    }

    pub fn status(self) -> AuthStatus {
        self.with_state(AuthState::status)
    }

    pub fn token(self) -> Option<String> {
        self.token.get()
    }

    pub fn user(self) -> Option<User> {
        self.session.with(|s| s.state().user().cloned())
    }

    pub fn loading(self) -> bool {
        self.with_state(AuthState::loading)
    }

    pub fn is_authenticated(self) -> bool {
        self.with_state(AuthState::is_authenticated)
    }

    pub fn is_admin(self) -> bool {
        self.with_state(AuthState::is_admin)
    }

    pub fn is_employee(self) -> bool {
        self.with_state(AuthState::is_employee)
    }

    pub fn has_known_role(self) -> bool {
        self.with_state(AuthState::has_known_role)
    }

    fn with_state<R>(self, f: impl FnOnce(&AuthState) -> R) -> R {
        self.session.with(|s| f(s.state()))
    }

    /// Client for service calls; pair it with [`AuthContext::token`].
    pub fn api(self) -> ApiClient {
        self.api.get_value()
    }
}

/// Build the auth context and provide it to descendants.
pub fn provide_auth(api: ApiClient) -> AuthContext {
    let ctx = AuthContext::new(api);
    provide_context(ctx);
    ctx
}

/// The auth context provided by `App`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
