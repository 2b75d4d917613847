//! File access collaborator
//!
//! The resolver and the CLI never touch the disk directly; they go
//! through [`FileOps`] so tests can substitute an in-memory
//! implementation.

use async_trait::async_trait;

use crate::error::FileOpsError;

/// Minimal load/save/exists capability over flat files.
#[async_trait]
pub trait FileOps: Send + Sync {
    async fn exists(&self, path: &str) -> bool;

    /// Load the full text of a file.
    async fn load(&self, path: &str) -> Result<String, FileOpsError>;

    /// Write `contents` to `path`, replacing any existing file.
    async fn save(&self, path: &str, contents: &str) -> Result<(), FileOpsError>;
}

/// Production [`FileOps`] backed by `tokio::fs`.
#[derive(Debug, Default, Clone)]
pub struct DiskFileOps;

#[async_trait]
impl FileOps for DiskFileOps {
    async fn exists(&self, path: &str) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn load(&self, path: &str) -> Result<String, FileOpsError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| FileOpsError::from_std(path, source))
    }

    async fn save(&self, path: &str, contents: &str) -> Result<(), FileOpsError> {
        tokio::fs::write(path, contents)
            .await
            .map_err(|source| FileOpsError::from_std(path, source))
    }
}
