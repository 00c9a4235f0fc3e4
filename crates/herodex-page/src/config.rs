//! Page configuration

use crate::debounce::DEFAULT_SETTLE;
use std::time::Duration;

/// Configuration for the page orchestrator
#[derive(Debug, Clone, Copy)]
pub struct PageConfig {
    /// Settle period for debounced search input
    pub debounce: Duration,
}

impl PageConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a specific debounce settle period (tests typically pass zero)
    #[inline]
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_SETTLE,
        }
    }
}
