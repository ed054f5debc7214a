//! Command-line interface for tuneforge.
//!
//! Maps flags onto `BatchSettings`, loads the cached corpus and runs one
//! batch. The pipeline core never reads configuration ambiently; this is
//! the only place arguments and environment meet the settings record.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::batch::BatchOrchestrator;
use crate::config::{BatchSettings, DEFAULT_ENDPOINT};
use crate::corpus;
use crate::llm::RemoteGenClient;

/// Batch forge for synthetic instruction-tuning data.
#[derive(Parser)]
#[command(name = "tuneforge")]
#[command(about = "Generate instruction-tuning JSONL from a chunked corpus via a remote model")]
#[command(version)]
pub struct Cli {
    /// Path to the cached chunk blob produced by the corpus chunker.
    #[arg(long, default_value = "container/batches/batch-0.cache")]
    pub cache: PathBuf,

    /// Append-only main result log (JSONL).
    #[arg(short = 'o', long, default_value = "container/batch-01.jsonl")]
    pub output: PathBuf,

    /// Directory for quarantined responses (must already exist).
    #[arg(long, default_value = "container/archives")]
    pub qc_dir: PathBuf,

    /// Log file for run events.
    #[arg(long, default_value = "container/logs/primary.log")]
    pub log_file: PathBuf,

    /// Remote generation endpoint.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// API key for the generation endpoint.
    #[arg(long, env = "TUNEFORGE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Seconds to block after each generation call (remote RPM ceiling).
    #[arg(long, default_value = "60")]
    pub delay_secs: u64,

    /// Timeout in seconds for a single generation call.
    #[arg(long, default_value = "120")]
    pub timeout_secs: u64,

    /// Process at most this many chunks.
    #[arg(long)]
    pub max_chunks: Option<usize>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

/// Parse command-line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Runs one batch with the parsed arguments.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let settings = BatchSettings::new(cli.api_key)
        .with_endpoint(cli.endpoint)
        .with_batch_cache_path(cli.cache)
        .with_result_path(cli.output)
        .with_quality_control_dir(cli.qc_dir)
        .with_log_path(cli.log_file)
        .with_request_delay(Duration::from_secs(cli.delay_secs))
        .with_request_timeout(Duration::from_secs(cli.timeout_secs))
        .with_max_chunks(cli.max_chunks);
    settings.validate()?;

    let chunks = corpus::load(&settings.batch_cache_path).with_context(|| {
        format!(
            "loading batch cache {}",
            settings.batch_cache_path.display()
        )
    })?;
    info!(chunks = chunks.len(), "Loaded batch cache");

    let client = RemoteGenClient::new(
        settings.endpoint.clone(),
        settings.api_key.clone(),
        settings.request_timeout,
    );

    let orchestrator = BatchOrchestrator::new(settings, Box::new(client));
    let stats = orchestrator.run(&chunks).await?;

    info!(
        succeeded = stats.succeeded,
        quarantined = stats.quarantined,
        records = stats.records_written,
        "Batch run complete"
    );
    Ok(())
}
