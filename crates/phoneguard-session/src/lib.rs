//! # phoneguard-session
//!
//! Sessions coordinate one capability provider each and own the data
//! derived from it: the capture session manages the camera stream and its
//! evidence gallery, the location session manages one-shot position fixes
//! and their bounded history. Sessions are in-memory only; their state
//! vanishes on application teardown.

pub mod capture;
pub mod dashboard;
pub mod location;

pub use capture::{CaptureSession, CapturedImage};
pub use dashboard::DashboardComposer;
pub use location::{LocationSession, TrackingHandle, spawn_tracking};
