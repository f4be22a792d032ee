//! Recording metadata persistence
//!
//! One JSON sidecar document per recorded video. This is the only
//! suspending boundary in the crate; failures surface as structured errors
//! and are never retried here.

use crate::project::schema::RecordingMetadata;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while saving or loading metadata.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed metadata document: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence boundary for recording metadata.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Persist a snapshot under `name`, returning the path written.
    async fn save(&self, metadata: &RecordingMetadata, name: &str) -> StoreResult<PathBuf>;

    /// Load a previously saved snapshot.
    async fn load(&self, path: &Path) -> StoreResult<RecordingMetadata>;
}

/// Sidecar metadata path for a recorded video file.
pub fn metadata_path_for_video(video_path: &Path) -> PathBuf {
    video_path.with_extension("metadata.json")
}

/// Stores metadata as pretty-printed JSON files in a base directory.
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

#[async_trait]
impl MetadataStore for JsonFileStore {
    async fn save(&self, metadata: &RecordingMetadata, name: &str) -> StoreResult<PathBuf> {
        tokio::fs::create_dir_all(&self.base_dir).await?;

        let path = self.base_dir.join(format!("{name}.metadata.json"));
        let data = serde_json::to_vec_pretty(metadata)?;
        tokio::fs::write(&path, data).await?;

        tracing::info!(
            path = %path.display(),
            clicks = metadata.clicks.len(),
            cursor_positions = metadata.cursor_positions.len(),
            "saved recording metadata"
        );
        Ok(path)
    }

    async fn load(&self, path: &Path) -> StoreResult<RecordingMetadata> {
        let data = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&data)?)
    }
}
