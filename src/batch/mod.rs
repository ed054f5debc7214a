//! Batch pipeline: the sequential per-chunk orchestrator.

mod orchestrator;

pub use orchestrator::{BatchError, BatchOrchestrator, BatchStats};
