//! Simulated geolocation provider.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::RngExt;

use phoneguard_core::AppResult;
use phoneguard_core::error::AppError;
use phoneguard_core::traits::geolocation::{PositionFix, PositionOptions, PositionProvider};
use phoneguard_core::types::LatLng;

/// Configured fix failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionFailure {
    /// The user denied location access.
    PermissionDenied,
    /// Geolocation is not supported on this host.
    Unavailable,
}

/// Accuracy radius reported for high-accuracy fixes, in meters.
const HIGH_ACCURACY_M: f64 = 8.0;

/// Accuracy degradation factor when high accuracy is not requested.
const COARSE_FACTOR: f64 = 5.0;

/// A position provider that simulates fixes around a base coordinate.
///
/// Each fresh fix jitters the base coordinates slightly. The provider
/// honors the request's `maximum_age`: a cached fix younger than the
/// tolerance is returned instead of a fresh read.
#[derive(Debug)]
pub struct SimulatedPositionProvider {
    base: LatLng,
    jitter_deg: f64,
    failure: Option<PositionFailure>,
    cache: Mutex<Option<CachedFix>>,
}

#[derive(Debug, Clone, Copy)]
struct CachedFix {
    fix: PositionFix,
    at: DateTime<Utc>,
}

impl SimulatedPositionProvider {
    /// Create a provider fixing around the given base coordinates.
    pub fn new(base: LatLng) -> Self {
        Self {
            base,
            jitter_deg: 0.0005,
            failure: None,
            cache: Mutex::new(None),
        }
    }

    /// Create a provider that fails every request with the given mode.
    pub fn failing(failure: PositionFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new(LatLng::new(0.0, 0.0))
        }
    }

    /// Override the jitter radius in decimal degrees.
    pub fn with_jitter(mut self, jitter_deg: f64) -> Self {
        self.jitter_deg = jitter_deg;
        self
    }
}

#[async_trait]
impl PositionProvider for SimulatedPositionProvider {
    fn provider_type(&self) -> &str {
        "simulated"
    }

    async fn current_position(&self, options: &PositionOptions) -> AppResult<PositionFix> {
        match self.failure {
            Some(PositionFailure::PermissionDenied) => {
                return Err(AppError::permission("location access was denied"));
            }
            Some(PositionFailure::Unavailable) => {
                return Err(AppError::unavailable(
                    "geolocation is not supported by this host",
                ));
            }
            None => {}
        }

        let now = Utc::now();
        let mut cache = self
            .cache
            .lock()
            .map_err(|_| AppError::internal("position cache lock poisoned"))?;

        if let Some(cached) = *cache {
            let age_ms = now.signed_duration_since(cached.at).num_milliseconds().max(0) as u128;
            // Strict comparison: a zero tolerance always forces a fresh read.
            if age_ms < options.maximum_age.as_millis() {
                tracing::debug!(age_ms, "returning cached position fix");
                return Ok(cached.fix);
            }
        }

        let mut rng = rand::rng();
        let fix = PositionFix {
            lat: self.base.lat + rng.random_range(-self.jitter_deg..=self.jitter_deg),
            lng: self.base.lng + rng.random_range(-self.jitter_deg..=self.jitter_deg),
            accuracy_m: if options.enable_high_accuracy {
                HIGH_ACCURACY_M
            } else {
                HIGH_ACCURACY_M * COARSE_FACTOR
            },
        };
        *cache = Some(CachedFix { fix, at: now });
        Ok(fix)
    }
}
