//! Loader for the cached chunk blob.

use std::fs;
use std::path::Path;

use crate::error::LoadError;

use super::types::{Chunk, ChunkSequence};

/// Loads the chunk sequence from the bincode blob at `path`.
///
/// Runs exactly once, before any other component starts. The returned
/// sequence is an explicit value handed to the orchestrator; no ambient
/// state is populated.
///
/// # Errors
///
/// Returns `LoadError::Io` when the file is missing or unreadable and
/// `LoadError::Decode` when the blob is corrupt or incompatible with the
/// chunk schema.
pub fn load(path: &Path) -> Result<ChunkSequence, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let chunks: Vec<Chunk> = bincode::deserialize(&bytes)?;
    Ok(ChunkSequence::from(chunks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_round_trip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("batch-0.cache");

        let chunks = vec![
            Chunk::new("first chunk").with_metadata("page", "1"),
            Chunk::new("second chunk"),
            Chunk::new("third chunk"),
        ];
        let encoded = bincode::serialize(&chunks).expect("Serialization should succeed");
        fs::write(&path, encoded).expect("Write should succeed");

        let loaded = load(&path).expect("Load should succeed");
        assert_eq!(loaded.len(), 3);
        for (index, chunk) in loaded.iter().enumerate() {
            assert_eq!(chunk, &chunks[index]);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("does-not-exist.cache");

        let result = load(&path);
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_load_corrupt_blob() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("corrupt.cache");

        // A length prefix pointing far past the end of the buffer.
        fs::write(&path, [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF])
            .expect("Write should succeed");

        let result = load(&path);
        assert!(matches!(result, Err(LoadError::Decode(_))));
    }
}
