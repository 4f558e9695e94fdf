//! Filesystem download sink.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use phoneguard_core::AppResult;
use phoneguard_core::traits::download::DownloadSink;

/// A download sink that saves payloads into a target directory.
///
/// Stands in for the browser's client-side save: the payload lands under
/// the suggested filename inside the configured directory, which is created
/// on first use.
#[derive(Debug, Clone)]
pub struct FsDownloadSink {
    directory: PathBuf,
}

impl FsDownloadSink {
    /// Create a sink writing into the given directory.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

#[async_trait]
impl DownloadSink for FsDownloadSink {
    async fn deliver(&self, filename: &str, payload: Bytes) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.directory).await?;
        let path = self.directory.join(filename);
        tokio::fs::write(&path, &payload).await?;
        tracing::debug!(path = %path.display(), bytes = payload.len(), "download delivered");
        Ok(())
    }
}
