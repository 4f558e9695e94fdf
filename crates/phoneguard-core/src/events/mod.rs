//! The security-event model.
//!
//! Events are created once — by the demo generator or an external trigger —
//! and are never mutated afterwards; they are only filtered, read, and
//! exported. The event store in `phoneguard-logs` is their sole owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::id::EventId;

/// The closed set of security-event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Someone attempted to access the device without authorization.
    UnauthorizedAccess,
    /// The device location changed or was refreshed.
    LocationChange,
    /// The security camera was activated.
    CameraActivation,
    /// The device was locked (locally or remotely).
    DeviceLock,
    /// A login was attempted.
    LoginAttempt,
}

impl EventKind {
    /// Stable snake_case name, as used in exports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnauthorizedAccess => "unauthorized_access",
            Self::LocationChange => "location_change",
            Self::CameraActivation => "camera_activation",
            Self::DeviceLock => "device_lock",
            Self::LoginAttempt => "login_attempt",
        }
    }

    /// Human-readable display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::UnauthorizedAccess => "Unauthorized Access",
            Self::LocationChange => "Location Change",
            Self::CameraActivation => "Camera Activation",
            Self::DeviceLock => "Device Lock",
            Self::LoginAttempt => "Login Attempt",
        }
    }
}

/// Event severity, ordered by ascending urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational.
    Low,
    /// Worth attention.
    Medium,
    /// Likely hostile activity.
    High,
    /// Active security incident.
    Critical,
}

impl Severity {
    /// Stable lowercase name, as used in exports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Uppercase badge label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// What caused a still image to be captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureTrigger {
    /// The user pressed the capture button.
    Manual,
    /// An unauthorized-access alert fired.
    UnauthorizedAccess,
    /// The motion detector fired.
    MotionDetected,
}

impl CaptureTrigger {
    /// Human-readable display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual Capture",
            Self::UnauthorizedAccess => "Unauthorized Access",
            Self::MotionDetected => "Motion Detected",
        }
    }
}

/// A single immutable security event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityEvent {
    /// Unique opaque identifier, assigned at creation.
    pub id: EventId,
    /// Event category.
    pub kind: EventKind,
    /// Urgency of the event.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Creation instant.
    pub timestamp: DateTime<Utc>,
    /// Optional structured context, immutable once set.
    pub details: Option<Map<String, Value>>,
}

impl SecurityEvent {
    /// Create a new event stamped with a generated id and the current time.
    pub fn new(
        kind: EventKind,
        severity: Severity,
        message: impl Into<String>,
        details: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            id: EventId::generate(),
            kind,
            severity,
            message: message.into(),
            timestamp: Utc::now(),
            details,
        }
    }

    /// Assemble an event from explicit parts (seed datasets, tests).
    pub fn from_parts(
        id: impl Into<EventId>,
        kind: EventKind,
        severity: Severity,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
        details: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            severity,
            message: message.into(),
            timestamp,
            details,
        }
    }
}
