//! In-memory security-event store.

use chrono::{DateTime, Duration, Utc};
use serde_json::{Map, Value, json};

use phoneguard_core::AppResult;
use phoneguard_core::error::AppError;
use phoneguard_core::events::{EventKind, SecurityEvent, Severity};
use phoneguard_core::types::EventId;

/// Ordered, in-memory collection of security events.
///
/// The store is the sole owner of its events; ids are unique within it.
/// Events vanish on application teardown — there is no persistence layer.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<SecurityEvent>,
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events in the store.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate events in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SecurityEvent> {
        self.events.iter()
    }

    /// The events as an ordered slice.
    pub fn events(&self) -> &[SecurityEvent] {
        &self.events
    }

    /// Look up an event by id.
    pub fn get(&self, id: &EventId) -> Option<&SecurityEvent> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Create and record a new event, returning its id.
    pub fn record(
        &mut self,
        kind: EventKind,
        severity: Severity,
        message: impl Into<String>,
        details: Option<Map<String, Value>>,
    ) -> EventId {
        let event = SecurityEvent::new(kind, severity, message, details);
        let id = event.id.clone();
        tracing::debug!(event = %id, kind = kind.as_str(), severity = severity.as_str(), "event recorded");
        self.events.push(event);
        id
    }

    /// Insert a pre-built event, rejecting duplicate ids.
    pub fn insert(&mut self, event: SecurityEvent) -> AppResult<EventId> {
        if self.get(&event.id).is_some() {
            return Err(AppError::validation(format!(
                "duplicate event id: {}",
                event.id
            )));
        }
        let id = event.id.clone();
        self.events.push(event);
        Ok(id)
    }

    /// Build a store seeded with the default demo dataset, timestamped
    /// relative to `now`.
    pub fn seed_demo(now: DateTime<Utc>) -> Self {
        let mut store = Self::new();
        let demo = [
            SecurityEvent::from_parts(
                "1",
                EventKind::UnauthorizedAccess,
                Severity::Critical,
                "Unauthorized access attempt detected",
                now - Duration::minutes(5),
                object(json!({ "attempts": 3, "location": "Unknown" })),
            ),
            SecurityEvent::from_parts(
                "2",
                EventKind::CameraActivation,
                Severity::Medium,
                "Security camera activated automatically",
                now - Duration::minutes(15),
                object(json!({ "trigger": "motion_detected" })),
            ),
            SecurityEvent::from_parts(
                "3",
                EventKind::LocationChange,
                Severity::Low,
                "Device location updated",
                now - Duration::minutes(30),
                object(json!({ "lat": 40.7128, "lng": -74.0060 })),
            ),
            SecurityEvent::from_parts(
                "4",
                EventKind::DeviceLock,
                Severity::Medium,
                "Device locked remotely",
                now - Duration::minutes(60),
                object(json!({ "user": "owner" })),
            ),
            SecurityEvent::from_parts(
                "5",
                EventKind::LoginAttempt,
                Severity::High,
                "Failed login attempt from unknown device",
                now - Duration::minutes(90),
                object(json!({ "ip": "192.168.1.100", "user_agent": "Unknown Browser" })),
            ),
        ];
        for event in demo {
            store.events.push(event);
        }
        store
    }
}

/// Unwrap a `json!` object literal into a details map.
fn object(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
