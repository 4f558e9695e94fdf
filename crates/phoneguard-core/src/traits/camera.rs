//! Media-stream provider trait.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Which way the camera faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FacingMode {
    /// Front-facing camera.
    #[default]
    User,
    /// Rear-facing camera.
    Environment,
}

/// Resolution and facing hints for stream acquisition.
///
/// These are hints, not guarantees: a provider may deliver frames at a
/// different resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConstraints {
    /// Preferred frame width in pixels.
    pub ideal_width: u32,
    /// Preferred frame height in pixels.
    pub ideal_height: u32,
    /// Preferred camera facing.
    pub facing: FacingMode,
}

impl Default for StreamConstraints {
    fn default() -> Self {
        Self {
            ideal_width: 1280,
            ideal_height: 720,
            facing: FacingMode::User,
        }
    }
}

/// One uncompressed video frame, RGB8 row-major.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Pixel data; length must be `width * height * 3`.
    pub pixels: Bytes,
}

impl VideoFrame {
    /// Expected pixel-buffer length for the frame dimensions.
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

/// A live video stream handle.
///
/// The owning session must call [`CameraStream::release`] when done so the
/// underlying hardware tracks are freed; holding an unreleased stream leaks
/// the camera lock.
pub trait CameraStream: Send + std::fmt::Debug {
    /// Whether the stream still has live tracks.
    fn is_live(&self) -> bool;

    /// Grab the current frame, if one is available.
    fn grab_frame(&mut self) -> Option<VideoFrame>;

    /// Release every track on the stream. Idempotent.
    fn release(&mut self);
}

/// Trait for media-stream providers.
#[async_trait]
pub trait CameraProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "synthetic").
    fn provider_type(&self) -> &str;

    /// Acquire a video stream honoring the given hints. Audio is never
    /// requested.
    async fn open(&self, constraints: &StreamConstraints) -> AppResult<Box<dyn CameraStream>>;
}
