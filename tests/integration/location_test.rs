//! End-to-end tests for the location session and the tracking schedule.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use phoneguard_core::traits::geolocation::{PositionOptions, PositionProvider};
use phoneguard_session::location::{HISTORY_CAPACITY, LocationSession, spawn_tracking};

use super::helpers::{FlakyProvider, SequenceProvider};

#[tokio::test]
async fn test_history_grows_to_min_of_n_and_capacity() {
    let mut session = LocationSession::new(
        Arc::new(SequenceProvider::default()),
        PositionOptions::default(),
    );
    for n in 1..=25 {
        session.refresh().await.expect("fix");
        assert_eq!(session.history_len(), n.min(HISTORY_CAPACITY));
    }
}

#[tokio::test]
async fn test_history_is_most_recent_first() {
    let mut session = LocationSession::new(
        Arc::new(SequenceProvider::default()),
        PositionOptions::default(),
    );
    for _ in 0..4 {
        session.refresh().await.expect("fix");
    }
    let lats: Vec<f64> = session.history().map(|s| s.lat).collect();
    assert_eq!(lats, [3.0, 2.0, 1.0, 0.0]);
    assert_eq!(session.current().expect("current").lat, 3.0);
}

#[tokio::test]
async fn test_failed_refresh_leaves_current_and_history_unchanged() {
    let provider = Arc::new(FlakyProvider::default());
    let shared: Arc<dyn PositionProvider> = Arc::clone(&provider) as Arc<dyn PositionProvider>;
    let mut session = LocationSession::new(shared, PositionOptions::default());

    session.refresh().await.expect("fix");
    let current = *session.current().expect("current");
    let history_len = session.history_len();

    provider.set_failing(true);
    let err = session.refresh().await.unwrap_err();
    assert_eq!(err.kind, phoneguard_core::error::ErrorKind::Unavailable);
    assert_eq!(*session.current().expect("current"), current);
    assert_eq!(session.history_len(), history_len);
    assert!(
        session
            .last_error()
            .expect("displayable message")
            .starts_with("Error getting location:")
    );

    // Recovery requires an explicit retry; nothing retries on its own.
    provider.set_failing(false);
    session.refresh().await.expect("fix");
    assert_eq!(session.history_len(), history_len + 1);
}

#[tokio::test]
async fn test_tracking_binds_the_flag_to_a_refresh_schedule() {
    let session = Arc::new(Mutex::new(LocationSession::new(
        Arc::new(SequenceProvider::default()),
        PositionOptions::default(),
    )));

    let handle = spawn_tracking(Arc::clone(&session), Duration::from_millis(10));
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert!(session.lock().await.is_tracking());

    handle.stop().await;

    let session = session.lock().await;
    assert!(!session.is_tracking());
    assert!(session.history_len() >= 1, "the schedule never refreshed");
}
