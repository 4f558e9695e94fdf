//! # phoneguard-providers
//!
//! Concrete implementations of the capability-provider traits from
//! `phoneguard-core`: a synthetic camera that renders test-pattern frames,
//! a simulated geolocation source, and a filesystem download sink. A real
//! device build would swap these for platform-backed providers; the
//! sessions never notice the difference.

pub mod camera;
pub mod download;
pub mod geolocation;

pub use camera::{CameraFailure, SyntheticCamera};
pub use download::FsDownloadSink;
pub use geolocation::{PositionFailure, SimulatedPositionProvider};
