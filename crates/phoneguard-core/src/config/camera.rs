//! Security camera configuration.

use serde::{Deserialize, Serialize};

use crate::traits::camera::{FacingMode, StreamConstraints};

/// Still-image encoding quality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    /// Smaller files, faster encode.
    Low,
    /// Balanced.
    Medium,
    /// Better quality.
    #[default]
    High,
}

impl ImageQuality {
    /// JPEG quality value for this setting.
    pub fn jpeg_quality(self) -> u8 {
        match self {
            Self::Low => 50,
            Self::Medium => 80,
            Self::High => 95,
        }
    }
}

/// Security camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Capture automatically when unauthorized access is detected.
    #[serde(default = "default_true")]
    pub auto_capture: bool,
    /// Trigger the camera when motion is detected.
    #[serde(default = "default_true")]
    pub motion_detection: bool,
    /// Still-image encoding quality.
    #[serde(default)]
    pub image_quality: ImageQuality,
    /// Preferred stream width in pixels.
    #[serde(default = "default_width")]
    pub ideal_width: u32,
    /// Preferred stream height in pixels.
    #[serde(default = "default_height")]
    pub ideal_height: u32,
}

impl CameraConfig {
    /// Stream acquisition hints derived from this section.
    pub fn constraints(&self) -> StreamConstraints {
        StreamConstraints {
            ideal_width: self.ideal_width,
            ideal_height: self.ideal_height,
            facing: FacingMode::User,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            auto_capture: true,
            motion_detection: true,
            image_quality: ImageQuality::default(),
            ideal_width: default_width(),
            ideal_height: default_height(),
        }
    }
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

fn default_true() -> bool {
    true
}
