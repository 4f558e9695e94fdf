//! Newtype wrappers for opaque domain identifiers.
//!
//! Identifiers are opaque strings, assigned once at creation time and never
//! mutated. Using distinct types prevents accidentally passing an `EventId`
//! where a `CaptureId` is expected.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype wrapper around an opaque `String` identifier.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new random (UUID-backed) identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(
    /// Unique identifier for a security event.
    EventId
);

define_id!(
    /// Unique identifier for a captured still image.
    CaptureId
);

impl CaptureId {
    /// Derive an identifier from the capture instant (millisecond precision).
    pub fn from_instant(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis().to_string())
    }
}
