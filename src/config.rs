//! Build-time client configuration.
//!
//! The API base URL is baked in at compile time from `FORMOTEX_API_URL`,
//! since a static WASM bundle has no process environment to read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Network-error notices are shown at most once per this window.
pub const NOTICE_COOLDOWN_MS: f64 = 1000.0;

/// Connection settings for the inventory API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `https://api.example.com`.
    pub base_url: String,
}

impl ApiConfig {
    /// Read `FORMOTEX_API_URL` as captured when the bundle was compiled.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("FORMOTEX_API_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_raw(None)
    }
}
