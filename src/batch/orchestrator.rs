//! Batch orchestrator driving the per-chunk generation loop.
//!
//! This module coordinates:
//! - Generation calls through a `GenerationBackend`
//! - The unconditional post-call throttle
//! - JSONL classification of each response
//! - Routing to the main result log or the quarantine directory
//!
//! Execution is strictly sequential: one chunk at a time, no retries, no
//! checkpointing. A crash mid-run loses progress tracking; the lines
//! already flushed to the result log are the only evidence of prior
//! completions and are never read back.

use thiserror::Error;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{error, info, warn};

use crate::config::BatchSettings;
use crate::corpus::ChunkSequence;
use crate::error::{GenerationError, WriteError};
use crate::jsonl;
use crate::llm::GenerationBackend;
use crate::quarantine::QuarantineRouter;

/// Errors that can occur during a batch run.
///
/// Every variant is fatal: the run halts at the current chunk index.
/// Validation failure never appears here — it is routed to quarantine
/// and the loop continues.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The remote generation call failed.
    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// A quarantine file could not be written.
    #[error("Quarantine write failed: {0}")]
    Quarantine(#[from] WriteError),

    /// The main result log could not be opened or appended to.
    #[error("Result log IO error: {0}")]
    ResultLog(#[from] std::io::Error),

    /// A validated record could not be re-serialized.
    #[error("Record serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Statistics about one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    /// Chunks taken through the full dispatch/throttle/classify/route cycle.
    pub processed: u64,
    /// Chunks whose records were appended to the main result log.
    pub succeeded: u64,
    /// Chunks routed to quality control.
    pub quarantined: u64,
    /// Total records appended to the main result log.
    pub records_written: u64,
}

impl BatchStats {
    /// Creates new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a chunk whose records reached the result log.
    fn record_success(&mut self, records: usize) {
        self.processed += 1;
        self.succeeded += 1;
        self.records_written += records as u64;
    }

    /// Records a chunk routed to quality control.
    fn record_quarantined(&mut self) {
        self.processed += 1;
        self.quarantined += 1;
    }
}

/// Drives the sequential per-chunk pipeline.
///
/// Every processed chunk ends in exactly one of two outcomes: its records
/// appended to the main result log, or a quarantine file named by its
/// index — never both, never neither.
pub struct BatchOrchestrator {
    settings: BatchSettings,
    backend: Box<dyn GenerationBackend>,
    quarantine: QuarantineRouter,
}

impl BatchOrchestrator {
    /// Creates an orchestrator over the given settings and backend.
    pub fn new(settings: BatchSettings, backend: Box<dyn GenerationBackend>) -> Self {
        let quarantine = QuarantineRouter::new(&settings.quality_control_dir);
        Self {
            settings,
            backend,
            quarantine,
        }
    }

    /// Gets the run settings.
    pub fn settings(&self) -> &BatchSettings {
        &self.settings
    }

    /// Runs the batch over `chunks` in index order.
    ///
    /// The result log is opened once, in append mode, and held for the
    /// whole run. Between the start of consecutive generation calls at
    /// least `request_delay` plus call latency elapses.
    ///
    /// # Errors
    ///
    /// Generation, quarantine-write and result-log failures halt the run
    /// at the current index with whatever output was already flushed.
    pub async fn run(&self, chunks: &ChunkSequence) -> Result<BatchStats, BatchError> {
        let mut result_log = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.settings.result_path)
            .await?;

        let limit = self.settings.max_chunks.unwrap_or(chunks.len());
        let mut stats = BatchStats::new();

        for (index, chunk) in chunks.iter().enumerate().take(limit) {
            info!(chunk = index, "Starting chunk");
            let response = self.backend.generate(&chunk.content).await?;

            // Unconditional post-call throttle: the remote service imposes a
            // per-minute request ceiling. Runs before classification and
            // regardless of outcome.
            tokio::time::sleep(self.settings.request_delay).await;

            match jsonl::parse_records(&response) {
                Ok(records) => {
                    let mut lines = String::new();
                    for record in &records {
                        lines.push_str(&serde_json::to_string(record)?);
                        lines.push('\n');
                    }
                    result_log.write_all(lines.as_bytes()).await?;
                    result_log.flush().await?;

                    stats.record_success(records.len());
                    info!(
                        chunk = index,
                        records = records.len(),
                        "Chunk finished -> result log"
                    );
                }
                Err(err) => {
                    error!(chunk = index, %err, "Invalid JSONL syntax -> quality control");
                    let path = self.quarantine.quarantine(&response, index).await?;

                    stats.record_quarantined();
                    warn!(
                        chunk = index,
                        path = %path.display(),
                        "Chunk finished -> quality control"
                    );
                }
            }
        }

        info!(
            processed = stats.processed,
            succeeded = stats.succeeded,
            quarantined = stats.quarantined,
            "All chunks have been processed"
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_stats_counters() {
        let mut stats = BatchStats::new();
        assert_eq!(stats.processed, 0);

        stats.record_success(3);
        assert_eq!(stats.processed, 1);
        assert_eq!(stats.succeeded, 1);
        assert_eq!(stats.records_written, 3);

        stats.record_quarantined();
        assert_eq!(stats.processed, 2);
        assert_eq!(stats.quarantined, 1);
        assert_eq!(stats.records_written, 3);
    }

    #[test]
    fn test_batch_error_display() {
        let err = BatchError::Generation(GenerationError::TimedOut { seconds: 120 });
        assert!(err.to_string().contains("Generation failed"));

        let err = BatchError::Quarantine(WriteError::Io {
            path: "archives/0-QC.jsonl".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        });
        assert!(err.to_string().contains("Quarantine write failed"));
    }
}
