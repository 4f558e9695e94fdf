//! Lock and alert configuration.

use serde::{Deserialize, Serialize};

/// Lock and alert configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Lock the device automatically when unauthorized access is detected.
    #[serde(default = "default_true")]
    pub auto_lock: bool,
    /// Idle minutes before the auto lock engages.
    #[serde(default = "default_lock_timeout")]
    pub lock_timeout_minutes: u64,
    /// Raise an alert on unauthorized access attempts.
    #[serde(default = "default_true")]
    pub unauthorized_access_alert: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            auto_lock: true,
            lock_timeout_minutes: default_lock_timeout(),
            unauthorized_access_alert: true,
        }
    }
}

fn default_lock_timeout() -> u64 {
    5
}

fn default_true() -> bool {
    true
}
