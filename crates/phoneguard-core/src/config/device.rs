//! Device identity configuration.

use serde::{Deserialize, Serialize};

/// Device identity configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Display name of the protected device.
    #[serde(default = "default_name")]
    pub name: String,
    /// Email address of the device owner.
    #[serde(default = "default_owner_email")]
    pub owner_email: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            owner_email: default_owner_email(),
        }
    }
}

fn default_name() -> String {
    "My Phone".to_string()
}

fn default_owner_email() -> String {
    "owner@example.com".to_string()
}
