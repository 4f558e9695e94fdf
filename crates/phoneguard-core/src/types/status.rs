//! Display-only device status aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;
use crate::types::geo::LatLng;

/// Aggregated device status shown on the dashboard.
///
/// Purely a display aggregate — no independent invariants beyond the range
/// bound on the battery percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    /// Whether the device is reachable.
    pub online: bool,
    /// Battery charge in percent, within `[0, 100]`.
    pub battery_percent: u8,
    /// Instant of the last device contact.
    pub last_seen: DateTime<Utc>,
    /// Last known location, if any.
    pub location: Option<LatLng>,
}

impl DeviceStatus {
    /// Build a status aggregate, validating the battery range.
    pub fn new(
        online: bool,
        battery_percent: u8,
        last_seen: DateTime<Utc>,
        location: Option<LatLng>,
    ) -> AppResult<Self> {
        if battery_percent > 100 {
            return Err(AppError::validation(format!(
                "battery percentage {battery_percent} is outside [0, 100]"
            )));
        }
        Ok(Self {
            online,
            battery_percent,
            last_seen,
            location,
        })
    }

    /// Relative last-seen label: "Just now", "5 minutes ago", "3 hours ago",
    /// "2 days ago".
    pub fn last_seen_relative(&self, now: DateTime<Utc>) -> String {
        let minutes = now.signed_duration_since(self.last_seen).num_minutes();
        if minutes < 1 {
            return "Just now".to_string();
        }
        if minutes < 60 {
            return format!("{minutes} minutes ago");
        }
        let hours = minutes / 60;
        if hours < 24 {
            return format!("{hours} hours ago");
        }
        format!("{} days ago", hours / 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn status_seen_at(last_seen: DateTime<Utc>) -> DeviceStatus {
        DeviceStatus::new(true, 85, last_seen, Some(LatLng::new(40.7128, -74.0060)))
            .expect("valid status")
    }

    #[test]
    fn test_battery_over_100_is_rejected() {
        let err = DeviceStatus::new(true, 101, Utc::now(), None).unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Validation);
    }

    #[test]
    fn test_battery_bounds_are_inclusive() {
        assert!(DeviceStatus::new(true, 0, Utc::now(), None).is_ok());
        assert!(DeviceStatus::new(true, 100, Utc::now(), None).is_ok());
    }

    #[test]
    fn test_relative_label_buckets() {
        let now = Utc::now();
        assert_eq!(status_seen_at(now).last_seen_relative(now), "Just now");
        assert_eq!(
            status_seen_at(now - Duration::minutes(5)).last_seen_relative(now),
            "5 minutes ago"
        );
        assert_eq!(
            status_seen_at(now - Duration::hours(3)).last_seen_relative(now),
            "3 hours ago"
        );
        assert_eq!(
            status_seen_at(now - Duration::days(2)).last_seen_relative(now),
            "2 days ago"
        );
    }
}
