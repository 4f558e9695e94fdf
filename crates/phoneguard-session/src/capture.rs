//! Camera capture session: stream lifecycle and the captured-image gallery.

use std::io::Cursor;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use image::codecs::jpeg::JpegEncoder;
use serde::Serialize;

use phoneguard_core::AppResult;
use phoneguard_core::config::camera::CameraConfig;
use phoneguard_core::error::AppError;
use phoneguard_core::events::CaptureTrigger;
use phoneguard_core::traits::camera::{CameraProvider, CameraStream, StreamConstraints, VideoFrame};
use phoneguard_core::traits::download::DownloadSink;
use phoneguard_core::types::CaptureId;

/// A captured still image held in the in-memory gallery.
#[derive(Debug, Clone, Serialize)]
pub struct CapturedImage {
    /// Identifier derived from the capture instant.
    pub id: CaptureId,
    /// Encoded JPEG payload.
    #[serde(skip)]
    pub image_data: Bytes,
    /// Capture instant.
    pub timestamp: DateTime<Utc>,
    /// What caused the capture.
    pub trigger: CaptureTrigger,
}

impl CapturedImage {
    /// The payload as a `data:image/jpeg;base64,...` URL.
    pub fn data_url(&self) -> String {
        format!("data:image/jpeg;base64,{}", BASE64.encode(&self.image_data))
    }

    /// Suggested filename for downloading this image.
    pub fn download_filename(&self) -> String {
        format!(
            "security-capture-{}.jpg",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}

/// Coordinates the camera stream and the gallery of captured stills.
///
/// The session is `Idle` until a stream is acquired, `Active` while one is
/// held, and back to `Idle` on [`CaptureSession::stop`]. Acquisition failure
/// stays `Idle` and surfaces the error; it is also kept as a displayable
/// message in [`CaptureSession::last_error`].
#[derive(Debug)]
pub struct CaptureSession {
    provider: Arc<dyn CameraProvider>,
    constraints: StreamConstraints,
    jpeg_quality: u8,
    stream: Option<Box<dyn CameraStream>>,
    gallery: Vec<CapturedImage>,
    last_error: Option<String>,
}

impl CaptureSession {
    /// Create an idle session using the given provider and camera settings.
    pub fn new(provider: Arc<dyn CameraProvider>, config: &CameraConfig) -> Self {
        Self {
            provider,
            constraints: config.constraints(),
            jpeg_quality: config.image_quality.jpeg_quality(),
            stream: None,
            gallery: Vec::new(),
            last_error: None,
        }
    }

    /// Whether a stream is currently held.
    pub fn is_active(&self) -> bool {
        self.stream.is_some()
    }

    /// Displayable message of the most recent failure, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Captured images, newest first.
    pub fn images(&self) -> &[CapturedImage] {
        &self.gallery
    }

    /// Number of captured images.
    pub fn image_count(&self) -> usize {
        self.gallery.len()
    }

    /// Acquire the camera stream and transition to `Active`.
    ///
    /// A no-op when already active. On failure the session stays `Idle` and
    /// the error is both returned and recorded as the displayable message.
    pub async fn start(&mut self) -> AppResult<()> {
        if self.stream.is_some() {
            return Ok(());
        }
        self.last_error = None;
        match self.provider.open(&self.constraints).await {
            Ok(stream) => {
                tracing::info!(provider = self.provider.provider_type(), "camera stream acquired");
                self.stream = Some(stream);
                Ok(())
            }
            Err(error) => {
                tracing::error!(%error, "camera access failed");
                self.last_error = Some(
                    "Failed to access camera. Please ensure camera permissions are granted."
                        .to_string(),
                );
                Err(error)
            }
        }
    }

    /// Release every track on the held stream and transition to `Idle`.
    ///
    /// Idempotent: calling on an idle session changes nothing.
    pub fn stop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.release();
            tracing::info!("camera stream released");
        }
    }

    /// Capture the current frame into the gallery.
    ///
    /// Returns `None` — a no-op, not an error — unless the session is
    /// `Active` and a live frame is available. The new image is prepended,
    /// keeping the gallery newest-first; the gallery itself is unbounded.
    pub fn capture(&mut self, trigger: CaptureTrigger) -> Option<CapturedImage> {
        let stream = self.stream.as_mut()?;
        if !stream.is_live() {
            return None;
        }
        let frame = stream.grab_frame()?;
        match encode_jpeg(&frame, self.jpeg_quality) {
            Ok(data) => {
                let timestamp = Utc::now();
                let image = CapturedImage {
                    id: CaptureId::from_instant(timestamp),
                    image_data: Bytes::from(data),
                    timestamp,
                    trigger,
                };
                self.gallery.insert(0, image.clone());
                tracing::debug!(id = %image.id, trigger = ?trigger, "frame captured");
                Some(image)
            }
            Err(error) => {
                tracing::error!(%error, "still-frame encoding failed");
                self.last_error = Some(error.message.clone());
                None
            }
        }
    }

    /// Remove an image from the gallery; no-op if absent.
    pub fn delete_image(&mut self, id: &CaptureId) -> bool {
        let before = self.gallery.len();
        self.gallery.retain(|image| &image.id != id);
        self.gallery.len() != before
    }

    /// Hand an image to the download sink under its suggested filename.
    pub async fn download_image(
        &self,
        sink: &dyn DownloadSink,
        image: &CapturedImage,
    ) -> AppResult<()> {
        sink.deliver(&image.download_filename(), image.image_data.clone())
            .await
    }

    /// External unauthorized-access trigger hook.
    ///
    /// Captures with the [`CaptureTrigger::UnauthorizedAccess`] trigger when
    /// active; a no-op otherwise. In a real deployment this would originate
    /// from an intrusion detector.
    pub fn simulate_unauthorized_access(&mut self) -> Option<CapturedImage> {
        if self.is_active() {
            self.capture(CaptureTrigger::UnauthorizedAccess)
        } else {
            None
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        // The session exclusively owns the stream; teardown must not leak
        // the camera lock.
        self.stop();
    }
}

/// Encode an RGB8 frame as JPEG at the given quality.
fn encode_jpeg(frame: &VideoFrame, quality: u8) -> AppResult<Vec<u8>> {
    let raw = frame.pixels.to_vec();
    let img = image::RgbImage::from_raw(frame.width, frame.height, raw)
        .ok_or_else(|| AppError::encoding("frame buffer does not match its dimensions"))?;
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut buf), quality);
    img.write_with_encoder(encoder)
        .map_err(|e| AppError::encoding(format!("failed to encode still frame: {e}")))?;
    Ok(buf)
}
