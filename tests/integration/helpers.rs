//! Shared test helpers for integration tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use phoneguard_core::AppResult;
use phoneguard_core::error::AppError;
use phoneguard_core::traits::download::DownloadSink;
use phoneguard_core::traits::geolocation::{PositionFix, PositionOptions, PositionProvider};

/// Download sink that records every delivery in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    deliveries: Mutex<Vec<(String, Bytes)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded (filename, payload) pairs in delivery order.
    pub fn deliveries(&self) -> Vec<(String, Bytes)> {
        self.deliveries.lock().expect("sink lock").clone()
    }
}

#[async_trait]
impl DownloadSink for MemorySink {
    async fn deliver(&self, filename: &str, payload: Bytes) -> AppResult<()> {
        self.deliveries
            .lock()
            .expect("sink lock")
            .push((filename.to_string(), payload));
        Ok(())
    }
}

/// Position provider yielding fixes with a strictly increasing latitude.
#[derive(Debug, Default)]
pub struct SequenceProvider {
    calls: AtomicU32,
}

#[async_trait]
impl PositionProvider for SequenceProvider {
    fn provider_type(&self) -> &str {
        "sequence"
    }

    async fn current_position(&self, _options: &PositionOptions) -> AppResult<PositionFix> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(PositionFix {
            lat: f64::from(n),
            lng: -74.0060,
            accuracy_m: 12.0,
        })
    }
}

/// Position provider whose failure can be toggled between requests.
#[derive(Debug, Default)]
pub struct FlakyProvider {
    fail: AtomicBool,
}

impl FlakyProvider {
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl PositionProvider for FlakyProvider {
    fn provider_type(&self) -> &str {
        "flaky"
    }

    async fn current_position(&self, _options: &PositionOptions) -> AppResult<PositionFix> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::unavailable("position is unavailable right now"));
        }
        Ok(PositionFix {
            lat: 40.7128,
            lng: -74.0060,
            accuracy_m: 9.0,
        })
    }
}
