//! Synthetic camera provider.

use async_trait::async_trait;
use bytes::Bytes;

use phoneguard_core::AppResult;
use phoneguard_core::error::AppError;
use phoneguard_core::traits::camera::{
    CameraProvider, CameraStream, StreamConstraints, VideoFrame,
};

/// Configured acquisition failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraFailure {
    /// The user denied camera access.
    PermissionDenied,
    /// No camera is available on this host.
    Unavailable,
}

/// A camera provider that synthesizes deterministic test-pattern frames.
///
/// Streams honor the requested resolution exactly. A failure mode can be
/// configured to exercise the error paths of the capture session.
#[derive(Debug, Default)]
pub struct SyntheticCamera {
    failure: Option<CameraFailure>,
}

impl SyntheticCamera {
    /// Create a provider that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider that fails every acquisition with the given mode.
    pub fn failing(failure: CameraFailure) -> Self {
        Self {
            failure: Some(failure),
        }
    }
}

#[async_trait]
impl CameraProvider for SyntheticCamera {
    fn provider_type(&self) -> &str {
        "synthetic"
    }

    async fn open(&self, constraints: &StreamConstraints) -> AppResult<Box<dyn CameraStream>> {
        match self.failure {
            Some(CameraFailure::PermissionDenied) => {
                Err(AppError::permission("camera access was denied"))
            }
            Some(CameraFailure::Unavailable) => {
                Err(AppError::unavailable("no camera device is available"))
            }
            None => Ok(Box::new(SyntheticStream {
                width: constraints.ideal_width,
                height: constraints.ideal_height,
                frame_counter: 0,
                live: true,
            })),
        }
    }
}

/// Stream of generated gradient frames.
#[derive(Debug)]
pub struct SyntheticStream {
    width: u32,
    height: u32,
    frame_counter: u64,
    live: bool,
}

impl CameraStream for SyntheticStream {
    fn is_live(&self) -> bool {
        self.live
    }

    fn grab_frame(&mut self) -> Option<VideoFrame> {
        if !self.live {
            return None;
        }
        self.frame_counter += 1;
        let shift = (self.frame_counter % 256) as u32;
        let mut pixels = Vec::with_capacity(self.width as usize * self.height as usize * 3);
        for y in 0..self.height {
            for x in 0..self.width {
                pixels.push((x * 255 / self.width.max(1)) as u8);
                pixels.push((y * 255 / self.height.max(1)) as u8);
                pixels.push(((x + y + shift) % 256) as u8);
            }
        }
        Some(VideoFrame {
            width: self.width,
            height: self.height,
            pixels: Bytes::from(pixels),
        })
    }

    fn release(&mut self) {
        self.live = false;
        tracing::debug!("synthetic stream tracks released");
    }
}
