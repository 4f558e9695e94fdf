//! Dashboard composition: the display-only device status aggregate.

use chrono::{DateTime, Utc};

use phoneguard_core::AppResult;
use phoneguard_core::types::{DeviceStatus, LatLng};

use crate::location::LocationSession;

/// Composes the device status shown on the dashboard.
///
/// Pure aggregation of display fields; the only check is the battery range
/// bound enforced by [`DeviceStatus`].
#[derive(Debug, Clone)]
pub struct DashboardComposer {
    online: bool,
    battery_percent: u8,
    fallback_location: Option<LatLng>,
}

impl DashboardComposer {
    /// Create a composer for the given connectivity and battery readings.
    pub fn new(online: bool, battery_percent: u8, fallback_location: Option<LatLng>) -> Self {
        Self {
            online,
            battery_percent,
            fallback_location,
        }
    }

    /// Composer primed with the demo device readings.
    pub fn demo() -> Self {
        Self::new(true, 85, Some(LatLng::new(40.7128, -74.0060)))
    }

    /// Aggregate the current device status.
    ///
    /// The location comes from the session's latest sample when one exists,
    /// falling back to the last known coordinates; `last_seen` is the sample
    /// instant, or `now` when no fix has been recorded yet.
    pub fn compose(&self, location: &LocationSession, now: DateTime<Utc>) -> AppResult<DeviceStatus> {
        let sample = location.current();
        DeviceStatus::new(
            self.online,
            self.battery_percent,
            sample.map(|s| s.timestamp).unwrap_or(now),
            sample
                .map(|s| s.coordinates())
                .or(self.fallback_location),
        )
    }
}
