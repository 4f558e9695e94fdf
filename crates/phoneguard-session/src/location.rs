//! Location session: one-shot position fixes and their bounded history.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use phoneguard_core::AppResult;
use phoneguard_core::error::AppError;
use phoneguard_core::traits::geolocation::{PositionOptions, PositionProvider};
use phoneguard_core::types::LocationSample;

/// Fixed capacity of the location history ring buffer.
///
/// Eviction is FIFO by arrival order: once full, each new sample drops the
/// oldest one.
pub const HISTORY_CAPACITY: usize = 10;

/// Coordinates one-shot position fixes and the sample history.
///
/// Holds at most one "current" sample (always the latest) plus a history of
/// up to [`HISTORY_CAPACITY`] samples, most-recent-first.
#[derive(Debug)]
pub struct LocationSession {
    provider: Arc<dyn PositionProvider>,
    options: PositionOptions,
    current: Option<LocationSample>,
    history: VecDeque<LocationSample>,
    tracking: bool,
    last_error: Option<String>,
}

impl LocationSession {
    /// Create a session using the given provider and request options.
    pub fn new(provider: Arc<dyn PositionProvider>, options: PositionOptions) -> Self {
        Self {
            provider,
            options,
            current: None,
            history: VecDeque::with_capacity(HISTORY_CAPACITY),
            tracking: false,
            last_error: None,
        }
    }

    /// The latest sample, if any fix has succeeded.
    pub fn current(&self) -> Option<&LocationSample> {
        self.current.as_ref()
    }

    /// Recorded samples, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &LocationSample> {
        self.history.iter()
    }

    /// Number of recorded history samples.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether continuous tracking is intended.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Displayable message of the most recent failure, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Mark the intent to track continuously.
    pub fn start_tracking(&mut self) {
        self.tracking = true;
    }

    /// Clear the tracking intent.
    pub fn stop_tracking(&mut self) {
        self.tracking = false;
    }

    /// Request a one-shot position fix.
    ///
    /// On success the sample becomes current and is prepended to the
    /// history, evicting the oldest entry beyond [`HISTORY_CAPACITY`]. On
    /// failure the current sample is left unchanged and the error is both
    /// returned and kept as the displayable message. A fix cannot be
    /// aborted once issued; every failure is terminal for that attempt.
    pub async fn refresh(&mut self) -> AppResult<LocationSample> {
        self.last_error = None;
        let request = self.provider.current_position(&self.options);
        let fix = match tokio::time::timeout(self.options.timeout, request).await {
            Ok(Ok(fix)) => fix,
            Ok(Err(error)) => {
                self.last_error = Some(format!("Error getting location: {error}"));
                return Err(error);
            }
            Err(_) => {
                let error = AppError::timeout(format!(
                    "position fix exceeded the {} s budget",
                    self.options.timeout.as_secs()
                ));
                self.last_error = Some(format!("Error getting location: {error}"));
                return Err(error);
            }
        };

        let sample = LocationSample {
            lat: fix.lat,
            lng: fix.lng,
            accuracy_m: fix.accuracy_m,
            timestamp: Utc::now(),
        };
        self.current = Some(sample);
        self.history.push_front(sample);
        self.history.truncate(HISTORY_CAPACITY);
        tracing::debug!(lat = sample.lat, lng = sample.lng, accuracy_m = sample.accuracy_m, "position fix recorded");
        Ok(sample)
    }
}

/// Handle for a running tracking schedule.
///
/// Dropping the handle detaches the task; call [`TrackingHandle::stop`] to
/// cancel it and clear the session's tracking intent.
#[derive(Debug)]
pub struct TrackingHandle {
    session: Arc<Mutex<LocationSession>>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl TrackingHandle {
    /// Cancel the schedule and clear the tracking intent.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
        self.session.lock().await.stop_tracking();
    }
}

/// Bind the tracking intent to a recurring refresh schedule.
///
/// Sets the session's tracking flag, then refreshes on every tick until the
/// returned handle is stopped. The first tick fires immediately, matching
/// the one-shot refresh a user gets when tracking starts. Refresh failures
/// are logged and do not stop the schedule.
pub fn spawn_tracking(
    session: Arc<Mutex<LocationSession>>,
    every: Duration,
) -> TrackingHandle {
    let (shutdown, mut rx) = watch::channel(false);
    let task_session = Arc::clone(&session);
    let task = tokio::spawn(async move {
        task_session.lock().await.start_tracking();
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = rx.changed() => break,
                _ = ticker.tick() => {
                    let mut session = task_session.lock().await;
                    if !session.is_tracking() {
                        break;
                    }
                    if let Err(error) = session.refresh().await {
                        tracing::warn!(%error, "scheduled location refresh failed");
                    }
                }
            }
        }
    });
    TrackingHandle {
        session,
        shutdown,
        task,
    }
}
