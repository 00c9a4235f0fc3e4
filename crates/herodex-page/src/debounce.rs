//! Debounced, deduplicated input coalescing
//!
//! Timer-based rendition of `debounceTime` + `distinctUntilChanged`: each
//! submission waits out the settle period; only the newest submission may
//! dispatch, and only if its value differs from the last dispatched one.
//! The generation counter is the "reset the timer" part: a newer submission
//! invalidates every older one the moment it arrives.

use std::time::Duration;
use tokio::sync::Mutex;

/// Default settle period for search input
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(500);

#[derive(Debug, Default)]
struct DebounceInner {
    generation: u64,
    last_dispatched: Option<String>,
}

/// Settle-period debouncer with value deduplication
#[derive(Debug)]
pub struct Debouncer {
    settle: Duration,
    inner: Mutex<DebounceInner>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE)
    }
}

impl Debouncer {
    /// Create a debouncer with the given settle period
    #[must_use]
    pub fn new(settle: Duration) -> Self {
        Self {
            settle,
            inner: Mutex::new(DebounceInner::default()),
        }
    }

    /// Submit an input value; resolves to the value if it should dispatch
    ///
    /// Returns `None` when a newer submission arrived during the settle
    /// period, or when the value equals the last dispatched one.
    pub async fn submit(&self, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        let my_generation = {
            let mut inner = self.inner.lock().await;
            inner.generation += 1;
            inner.generation
        };

        if !self.settle.is_zero() {
            tokio::time::sleep(self.settle).await;
        }

        let mut inner = self.inner.lock().await;
        if inner.generation != my_generation {
            // superseded
            return None;
        }
        if inner.last_dispatched.as_deref() == Some(value.as_str()) {
            return None;
        }
        inner.last_dispatched = Some(value.clone());
        Some(value)
    }

    /// Forget the last dispatched value so it may dispatch again
    pub async fn reset(&self) {
        self.inner.lock().await.last_dispatched = None;
    }
}
