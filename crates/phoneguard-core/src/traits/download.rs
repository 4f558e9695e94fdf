//! File-download sink trait.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for client-side save targets.
///
/// Accepts a payload and a suggested filename and triggers a save. The
/// filesystem sink in `phoneguard-providers` is the default implementation.
#[async_trait]
pub trait DownloadSink: Send + Sync + std::fmt::Debug + 'static {
    /// Deliver a payload under the suggested filename.
    async fn deliver(&self, filename: &str, payload: Bytes) -> AppResult<()>;
}
