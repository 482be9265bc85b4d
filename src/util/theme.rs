//! Theme preference: light, dark, or follow the system.
//!
//! Stored under the `theme` key independently of the session and applied as
//! a class on the `<html>` element.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; native builds read the
//! default and ignore writes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::{BrowserStorage, KeyValueStore, THEME_KEY};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl Theme {
    /// Unknown or missing values fall back to light.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("dark") => Self::Dark,
            Some("system") => Self::System,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Concrete theme once the system preference is known.
    #[must_use]
    pub fn resolve(self, system_dark: bool) -> Self {
        match self {
            Self::System if system_dark => Self::Dark,
            Self::System => Self::Light,
            other => other,
        }
    }

    /// Opposite of what is currently shown.
    #[must_use]
    pub fn toggle(self, system_dark: bool) -> Self {
        match self.resolve(system_dark) {
            Self::Dark => Self::Light,
            _ => Self::Dark,
        }
    }
}

/// Read the stored preference.
pub fn read_preference() -> Theme {
    let stored = BrowserStorage.get(THEME_KEY).ok().flatten();
    Theme::parse(stored.as_deref())
}

/// Persist the preference, ignoring storage failures.
pub fn save(theme: Theme) {
    if let Err(e) = BrowserStorage.set(THEME_KEY, theme.as_str()) {
        log::debug!("theme not persisted: {e}");
    }
}

/// Whether the OS asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Put the resolved theme's class on `<html>`.
pub fn apply(theme: Theme) {
    let resolved = theme.resolve(system_prefers_dark());
    #[cfg(feature = "csr")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = root.class_list();
            let _ = classes.remove_2("light", "dark");
            let _ = classes.add_1(resolved.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = resolved;
    }
}
