//! Location tracking configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::traits::geolocation::PositionOptions;

/// Location tracking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Whether continuous tracking may be started.
    #[serde(default = "default_true")]
    pub tracking_enabled: bool,
    /// Seconds between scheduled refreshes while tracking.
    #[serde(default = "default_update_frequency")]
    pub update_frequency_seconds: u64,
    /// Prefer GPS precision over battery life.
    #[serde(default = "default_true")]
    pub high_accuracy: bool,
    /// Budget in seconds for a single position fix.
    #[serde(default = "default_fix_timeout")]
    pub fix_timeout_seconds: u64,
    /// Accept a cached fix no older than this many seconds.
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age_seconds: u64,
}

impl LocationConfig {
    /// Provider options derived from this section.
    pub fn position_options(&self) -> PositionOptions {
        PositionOptions {
            enable_high_accuracy: self.high_accuracy,
            timeout: Duration::from_secs(self.fix_timeout_seconds),
            maximum_age: Duration::from_secs(self.cache_max_age_seconds),
        }
    }

    /// Interval between scheduled refreshes while tracking.
    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_frequency_seconds)
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            tracking_enabled: true,
            update_frequency_seconds: default_update_frequency(),
            high_accuracy: true,
            fix_timeout_seconds: default_fix_timeout(),
            cache_max_age_seconds: default_cache_max_age(),
        }
    }
}

fn default_update_frequency() -> u64 {
    30
}

fn default_fix_timeout() -> u64 {
    10
}

fn default_cache_max_age() -> u64 {
    60
}

fn default_true() -> bool {
    true
}
