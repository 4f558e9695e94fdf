//! Shared domain types: identifiers, filters, geo samples, device status.

pub mod filter;
pub mod geo;
pub mod id;
pub mod status;

pub use filter::{KindFilter, SeverityFilter};
pub use geo::{LatLng, LocationSample};
pub use id::{CaptureId, EventId};
pub use status::DeviceStatus;
