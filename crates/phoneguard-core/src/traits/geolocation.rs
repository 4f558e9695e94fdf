//! Position-fix provider trait.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// Options for a one-shot position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    /// Prefer the most precise source available (GPS), at a battery cost.
    pub enable_high_accuracy: bool,
    /// Budget for the fix; exceeding it is a timeout failure.
    pub timeout: Duration,
    /// A cached fix no older than this may be returned instead of a fresh
    /// read.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(60),
        }
    }
}

/// A raw position fix as reported by the provider.
///
/// The session stamps the sample instant itself when it records the fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionFix {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// Accuracy radius in meters.
    pub accuracy_m: f64,
}

/// Trait for one-shot position-fix providers.
///
/// Implementations exist for the simulated provider in
/// `phoneguard-providers`; a real device build would back this with a
/// platform geolocation service.
#[async_trait]
pub trait PositionProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "simulated").
    fn provider_type(&self) -> &str;

    /// Request a one-shot position fix.
    ///
    /// There is no cancellation once a request is issued; callers enforce
    /// the timeout budget around this call.
    async fn current_position(&self, options: &PositionOptions) -> AppResult<PositionFix>;
}
