//! Rate-limited "cannot reach the server" notice.
//!
//! DESIGN
//! ======
//! A burst of failed requests (a page firing four list queries while the
//! API is down) must produce one notice, not four. `NoticeLimiter` is a
//! fixed cooldown window over caller-supplied millisecond timestamps so it
//! can be driven by `Date.now()` in the browser and by literals in tests.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::sync::{Arc, Mutex};

/// Allows one event per cooldown window.
#[derive(Clone, Debug)]
pub struct NoticeLimiter {
    cooldown_ms: f64,
    last_shown_ms: Option<f64>,
}

impl NoticeLimiter {
    #[must_use]
    pub fn new(cooldown_ms: f64) -> Self {
        Self { cooldown_ms, last_shown_ms: None }
    }

    /// Record an event at `now_ms`; returns whether it should be shown.
    pub fn allow(&mut self, now_ms: f64) -> bool {
        match self.last_shown_ms {
            Some(last) if now_ms - last < self.cooldown_ms => false,
            _ => {
                self.last_shown_ms = Some(now_ms);
                true
            }
        }
    }
}

type Sink = Arc<dyn Fn(&str) + Send + Sync>;

/// Shared limiter plus the sink that displays the notice.
#[derive(Clone)]
pub struct NetworkNotice {
    limiter: Arc<Mutex<NoticeLimiter>>,
    sink: Sink,
}

impl NetworkNotice {
    pub const MESSAGE: &'static str = "Could not reach the server. Check your connection.";

    pub fn new(cooldown_ms: f64, sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self { limiter: Arc::new(Mutex::new(NoticeLimiter::new(cooldown_ms))), sink: Arc::new(sink) }
    }

    /// Report a network failure observed at `now_ms`.
    pub fn report_at(&self, now_ms: f64) -> bool {
        let allowed = self
            .limiter
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .allow(now_ms);
        if allowed {
            (self.sink)(Self::MESSAGE);
        }
        allowed
    }

    /// Report a network failure observed now.
    pub fn report(&self) -> bool {
        self.report_at(now_ms())
    }
}

/// Milliseconds since the Unix epoch, from the browser clock.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        let elapsed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_millis());
        #[allow(clippy::cast_precision_loss)]
        let ms = elapsed as f64;
        ms
    }
}
