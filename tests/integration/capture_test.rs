//! End-to-end tests for the camera capture session.

use std::sync::Arc;

use phoneguard_core::config::camera::CameraConfig;
use phoneguard_core::events::CaptureTrigger;
use phoneguard_providers::{CameraFailure, FsDownloadSink, SyntheticCamera};
use phoneguard_session::CaptureSession;

fn active_session_config() -> CameraConfig {
    // Small frames keep the JPEG encoding fast in tests.
    CameraConfig {
        ideal_width: 64,
        ideal_height: 36,
        ..CameraConfig::default()
    }
}

#[tokio::test]
async fn test_capture_while_idle_is_a_noop() {
    let mut session = CaptureSession::new(Arc::new(SyntheticCamera::new()), &active_session_config());
    assert!(session.capture(CaptureTrigger::Manual).is_none());
    assert!(session.simulate_unauthorized_access().is_none());
    assert_eq!(session.image_count(), 0);
}

#[tokio::test]
async fn test_full_capture_cycle_keeps_gallery_newest_first() {
    let mut session = CaptureSession::new(Arc::new(SyntheticCamera::new()), &active_session_config());
    session.start().await.expect("camera");
    assert!(session.is_active());

    let manual = session.capture(CaptureTrigger::Manual).expect("capture");
    let alert = session.simulate_unauthorized_access().expect("capture");

    assert_eq!(session.image_count(), 2);
    assert_eq!(session.images()[0].id, alert.id);
    assert_eq!(session.images()[0].trigger, CaptureTrigger::UnauthorizedAccess);
    assert_eq!(session.images()[1].id, manual.id);

    session.stop();
    assert!(!session.is_active());
    // Stopping again changes nothing and raises no error.
    session.stop();
    assert!(!session.is_active());
    // And a stopped camera no longer captures.
    assert!(session.capture(CaptureTrigger::Manual).is_none());
    assert_eq!(session.image_count(), 2);
}

#[tokio::test]
async fn test_denied_camera_reports_and_stays_idle() {
    let provider = Arc::new(SyntheticCamera::failing(CameraFailure::PermissionDenied));
    let mut session = CaptureSession::new(provider, &active_session_config());

    let err = session.start().await.unwrap_err();
    assert_eq!(err.kind, phoneguard_core::error::ErrorKind::Permission);
    assert!(!session.is_active());
    assert!(
        session
            .last_error()
            .expect("displayable message")
            .contains("camera permissions")
    );
}

#[tokio::test]
async fn test_downloaded_capture_is_a_jpeg_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sink = FsDownloadSink::new(dir.path());

    let mut session = CaptureSession::new(Arc::new(SyntheticCamera::new()), &active_session_config());
    session.start().await.expect("camera");
    let image = session.capture(CaptureTrigger::Manual).expect("capture");
    session
        .download_image(&sink, &image)
        .await
        .expect("download");

    let path = dir.path().join(image.download_filename());
    let written = std::fs::read(&path).expect("written file");
    assert_eq!(written, image.image_data);
    // JPEG start-of-image marker.
    assert_eq!(&written[..2], &[0xFF, 0xD8]);
}

#[tokio::test]
async fn test_delete_image_removes_only_the_target() {
    let mut session = CaptureSession::new(Arc::new(SyntheticCamera::new()), &active_session_config());
    session.start().await.expect("camera");
    let first = session.capture(CaptureTrigger::Manual).expect("capture");
    let second = session.capture(CaptureTrigger::MotionDetected).expect("capture");

    assert!(session.delete_image(&first.id));
    assert_eq!(session.image_count(), 1);
    assert_eq!(session.images()[0].id, second.id);
    // Deleting an absent id is a no-op.
    assert!(!session.delete_image(&first.id));
    assert_eq!(session.image_count(), 1);
}
