//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Field defaults reproduce the application's factory settings, so
//! an empty configuration source yields a fully working setup.

pub mod camera;
pub mod device;
pub mod location;
pub mod logging;
pub mod notifications;
pub mod privacy;
pub mod security;

use serde::{Deserialize, Serialize};

use self::camera::CameraConfig;
use self::device::DeviceConfig;
use self::location::LocationConfig;
use self::logging::LoggingConfig;
use self::notifications::NotificationsConfig;
use self::privacy::PrivacyConfig;
use self::security::SecurityConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged TOML
/// configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Device identity settings.
    #[serde(default)]
    pub device: DeviceConfig,
    /// Lock and alert settings.
    #[serde(default)]
    pub security: SecurityConfig,
    /// Location tracking settings.
    #[serde(default)]
    pub location: LocationConfig,
    /// Security camera settings.
    #[serde(default)]
    pub camera: CameraConfig,
    /// Notification delivery settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,
    /// Retention and encryption settings.
    #[serde(default)]
    pub privacy: PrivacyConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `PHONEGUARD`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PHONEGUARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
