//! Retention and encryption configuration.

use serde::{Deserialize, Serialize};

/// Retention and encryption configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivacyConfig {
    /// Days to keep captured data before purging.
    #[serde(default = "default_retention")]
    pub data_retention_days: u32,
    /// Encrypt stored data.
    #[serde(default = "default_true")]
    pub encrypt_data: bool,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            data_retention_days: default_retention(),
            encrypt_data: true,
        }
    }
}

fn default_retention() -> u32 {
    30
}

fn default_true() -> bool {
    true
}
