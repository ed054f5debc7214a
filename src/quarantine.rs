//! Quarantine routing for responses that failed validation.
//!
//! Each quarantined response lands in its own file named by chunk index,
//! containing the raw response text verbatim so it can be reviewed or
//! repaired by hand.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::WriteError;

/// Routes raw invalid responses to per-chunk files for manual review.
pub struct QuarantineRouter {
    /// Directory receiving quarantine files. Never created by the router.
    dir: PathBuf,
}

impl QuarantineRouter {
    /// Creates a router over the given quality-control directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the file path used for a chunk index.
    pub fn quarantine_path(&self, chunk_index: usize) -> PathBuf {
        self.dir.join(format!("{chunk_index}-QC.jsonl"))
    }

    /// Persists `raw` verbatim for the given chunk index, overwriting any
    /// existing file at that path.
    ///
    /// # Errors
    ///
    /// Returns `WriteError` when the quality-control directory does not
    /// exist or is not writable. The directory is not auto-created.
    pub async fn quarantine(&self, raw: &str, chunk_index: usize) -> Result<PathBuf, WriteError> {
        let path = self.quarantine_path(chunk_index);
        fs::write(&path, raw).await.map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Returns the quality-control directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
