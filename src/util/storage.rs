//! Key-value persistence and the bearer-token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only credential the client holds. It is written on
//! sign-in/sign-up, read once at boot, and removed on sign-out.
//!
//! ERROR HANDLING
//! ==============
//! Storage can be disabled (private mode, quota, sandboxed iframes). Any
//! backend failure switches `TokenStore` to memory-only mode for the rest of
//! the tab's lifetime; the session keeps working without persistence.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;

pub const TOKEN_KEY: &str = "token";
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// String key-value backend.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Always unavailable outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|e| StorageError::Operation(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Operation(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Operation(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Operation(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process backend, used in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}

/// Owner of the persisted bearer token.
///
/// The in-memory copy is authoritative; the backend mirrors it while it
/// keeps working. A blank token is treated as no token.
#[derive(Debug)]
pub struct TokenStore<S> {
    backend: S,
    current: Option<String>,
    persistent: bool,
}

impl<S: KeyValueStore> TokenStore<S> {
    /// Load the persisted token, if any.
    pub fn open(backend: S) -> Self {
        let (current, persistent) = match backend.get(TOKEN_KEY) {
            Ok(value) => (normalize(value), true),
            Err(e) => {
                log::warn!("token storage unavailable, keeping session in memory: {e}");
                (None, false)
            }
        };
        Self { backend, current, persistent }
    }

    #[must_use]
    pub fn read(&self) -> Option<String> {
        self.current.clone()
    }

    /// Replace the token; `None` removes it.
    pub fn write(&mut self, token: Option<String>) {
        self.current = normalize(token);
        if !self.persistent {
            return;
        }
        let result = match &self.current {
            Some(token) => self.backend.set(TOKEN_KEY, token),
            None => self.backend.remove(TOKEN_KEY),
        };
        if let Err(e) = result {
            log::warn!("token storage failed, falling back to memory: {e}");
            self.persistent = false;
        }
    }

    #[must_use]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Whether writes still reach the backend.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }
}

fn normalize(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}
