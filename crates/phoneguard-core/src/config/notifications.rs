//! Notification delivery configuration.

use serde::{Deserialize, Serialize};

/// Notification delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Deliver security alerts by email.
    #[serde(default = "default_true")]
    pub email: bool,
    /// Deliver instant push alerts.
    #[serde(default = "default_true")]
    pub push: bool,
    /// Suppress everything below high priority.
    #[serde(default)]
    pub critical_only: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            critical_only: false,
        }
    }
}

fn default_true() -> bool {
    true
}
