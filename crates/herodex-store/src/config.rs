//! Store configuration

use std::time::Duration;

/// Default simulated latency per operation
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Configuration for the in-memory store
#[derive(Debug, Clone, Copy)]
pub struct StoreConfig {
    /// Simulated latency applied before every operation
    pub latency: Duration,
}

impl StoreConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a specific simulated latency (tests typically pass zero)
    #[inline]
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
        }
    }
}
