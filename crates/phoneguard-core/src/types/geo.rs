//! Geographic primitives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl LatLng {
    /// Create a coordinate pair.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Six decimal places, matching the dashboard coordinate readout.
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// One recorded position fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// Accuracy radius in meters.
    pub accuracy_m: f64,
    /// Sample instant.
    pub timestamp: DateTime<Utc>,
}

impl LocationSample {
    /// The sample's coordinate pair.
    pub fn coordinates(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}
