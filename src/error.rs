//! Error types for tuneforge operations.
//!
//! Defines error types for the major subsystems:
//! - Batch cache loading
//! - Remote generation calls
//! - Quarantine file writes
//!
//! Validation failure is deliberately not represented here: a response
//! that fails the JSONL check is a routine outcome handled by the
//! quarantine path, not an error that halts the run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the cached chunk blob.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read batch cache '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Batch cache is corrupt or has an incompatible schema: {0}")]
    Decode(#[from] bincode::Error),
}

/// Errors that can occur during a remote generation call.
///
/// All variants are fatal for the current run; there is no retry.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    Request(String),

    #[error("Generation call timed out after {seconds} seconds")]
    TimedOut { seconds: u64 },

    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },
}

/// Errors that can occur while writing a quarantine file.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to write quarantine file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_display() {
        let err = GenerationError::TimedOut { seconds: 120 };
        assert!(err.to_string().contains("120 seconds"));

        let err = GenerationError::Api {
            code: 429,
            message: "rate limited".to_string(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn test_write_error_includes_path() {
        let err = WriteError::Io {
            path: PathBuf::from("archives/3-QC.jsonl"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert!(err.to_string().contains("3-QC.jsonl"));
    }
}
