//! Capability-provider traits.
//!
//! The camera, geolocation, and file-download boundaries are modeled as
//! traits defined here and implemented in `phoneguard-providers`. Sessions
//! depend only on these seams, never on a concrete backend.

pub mod camera;
pub mod download;
pub mod geolocation;

pub use camera::{CameraProvider, CameraStream, FacingMode, StreamConstraints, VideoFrame};
pub use download::DownloadSink;
pub use geolocation::{PositionFix, PositionOptions, PositionProvider};
