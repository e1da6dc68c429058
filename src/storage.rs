//! Shared storage error type and data-directory resolution.

use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The goal does not exist, or belongs to another device. The two
    /// cases are indistinguishable to callers.
    #[error("Goal not found: {0}")]
    GoalNotFound(Uuid),

    /// The item does not exist, or belongs to another device.
    #[error("Item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("Could not determine data directory")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get the default data directory (e.g. ~/.local/share/memobox)
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|p| p.join("memobox"))
        .ok_or(StorageError::DataDirNotFound)
}
