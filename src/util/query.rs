//! Binds a [`KeyedQuery`] to the session token.
//!
//! Each list page calls [`use_token_query`] with its service function. The
//! query re-runs whenever the token changes, is disabled while signed out,
//! and is refreshed by [`TokenQuery::invalidate`] after a mutation.

use std::future::Future;

use leptos::prelude::*;

use super::auth::use_auth;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::state::query::{KeyedQuery, QueryTicket};

pub struct TokenQuery<T: Send + Sync + 'static> {
    state: RwSignal<KeyedQuery<T>>,
    refresh: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for TokenQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for TokenQuery<T> {}

impl<T: Clone + Send + Sync + 'static> TokenQuery<T> {
    pub fn data(self) -> Option<T> {
        self.state.with(|q| q.data().cloned())
    }

    pub fn error(self) -> Option<ApiError> {
        self.state.with(|q| q.error().cloned())
    }

    pub fn is_loading(self) -> bool {
        self.state.with(KeyedQuery::is_loading)
    }

    pub fn is_fetching(self) -> bool {
        self.state.with(KeyedQuery::is_fetching)
    }

    /// Refetch after a mutation, superseding any in-flight request.
    pub fn invalidate(self) {
        self.refresh.run(());
    }
}

/// Fetch `T` with the current token and keep it fresh.
pub fn use_token_query<T, F, Fut>(fetch: F) -> TokenQuery<T>
where
    T: Send + Sync + 'static,
    F: Fn(ApiClient, String) -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let auth = use_auth();
    let state = RwSignal::new(KeyedQuery::<T>::default());

    let run = move |ticket: QueryTicket| {
        let api = auth.api();
        leptos::task::spawn_local(async move {
            let result = fetch(api, ticket.key().to_owned()).await;
            // A rejected token means the session is gone; let it re-resolve.
            if matches!(result, Err(ApiError::Unauthorized)) {
                auth.refetch();
            }
            if state.try_update(|q| q.resolve(&ticket, result)) != Some(true) {
                log::debug!("discarded stale list response");
            }
        });
    };

    Effect::new(move || {
        let token = auth.token();
        if let Some(ticket) = state.try_update(|q| q.set_key(token)).flatten() {
            run(ticket);
        }
    });

    let refresh = Callback::new(move |()| {
        if let Some(ticket) = state.try_update(KeyedQuery::invalidate).flatten() {
            run(ticket);
        }
    });

    TokenQuery { state, refresh }
}
