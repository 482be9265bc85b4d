//! Token-keyed query cache with request dedup and a stale-response guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session profile and every CRUD list are fetched with the current
//! bearer token. When the token changes the cached value belongs to someone
//! else, so the query is keyed by the token and re-issued on key change.
//!
//! DESIGN
//! ======
//! Every fetch is described by a [`QueryTicket`] carrying the key and a
//! generation number. `resolve` applies a result only when its ticket still
//! matches the current key and generation; anything else is a late answer
//! for a superseded request and is dropped. No cancellation is needed.
//!
//! `refetch` deduplicates (no new ticket while one is in flight), while
//! `invalidate` always supersedes the in-flight request, since a mutation
//! may have landed after that request was sent.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::error::ApiError;

/// Handle for one issued fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryTicket {
    key: String,
    generation: u64,
}

impl QueryTicket {
    /// Token the fetch must be sent with.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyedQuery<T> {
    key: Option<String>,
    generation: u64,
    in_flight: bool,
    data: Option<T>,
    error: Option<ApiError>,
}

impl<T> Default for KeyedQuery<T> {
    fn default() -> Self {
        Self { key: None, generation: 0, in_flight: false, data: None, error: None }
    }
}

impl<T> KeyedQuery<T> {
    /// Switch to `key`. Cached data for the old key is dropped.
    ///
    /// Returns the ticket to fetch with, or `None` when the key did not
    /// change or the query is now disabled.
    pub fn set_key(&mut self, key: Option<String>) -> Option<QueryTicket> {
        if self.key == key {
            return None;
        }
        self.key = key;
        self.data = None;
        self.error = None;
        self.generation += 1;
        self.in_flight = self.key.is_some();
        self.ticket()
    }

    /// Re-run the query for the current key unless a fetch is in flight.
    pub fn refetch(&mut self) -> Option<QueryTicket> {
        if self.in_flight || self.key.is_none() {
            return None;
        }
        self.issue()
    }

    /// Re-run the query, superseding any fetch already in flight.
    pub fn invalidate(&mut self) -> Option<QueryTicket> {
        if self.key.is_none() {
            return None;
        }
        self.issue()
    }

    /// Apply the outcome of `ticket`. Returns `false` when the ticket was
    /// superseded and the result was discarded.
    pub fn resolve(&mut self, ticket: &QueryTicket, result: Result<T, ApiError>) -> bool {
        if ticket.generation != self.generation || self.key.as_deref() != Some(ticket.key.as_str()) {
            return false;
        }
        self.in_flight = false;
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
            }
            Err(e) => {
                // A rejected token invalidates whatever it fetched before.
                if e == ApiError::Unauthorized {
                    self.data = None;
                }
                self.error = Some(e);
            }
        }
        true
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.key.is_some()
    }

    /// A fetch is outstanding.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    /// A fetch is outstanding and there is nothing cached to show yet.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight && self.data.is_none()
    }

    /// The current key has been answered at least once (value or error).
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.data.is_some() || self.error.is_some()
    }

    fn issue(&mut self) -> Option<QueryTicket> {
        self.generation += 1;
        self.in_flight = true;
        self.ticket()
    }

    fn ticket(&self) -> Option<QueryTicket> {
        self.key
            .clone()
            .map(|key| QueryTicket { key, generation: self.generation })
    }
}
