//! The `run` subcommand: execute the extract-transform-load pipeline once.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use insidertraders_lib::alphavantage_api::Client;
use insidertraders_lib::{
    backup_filename, fetch_all, transform, write_backup, Config, InsiderTransaction,
    PipelineError, RunSummary, Store,
};

/// Arguments for the `run` subcommand.
#[derive(Args)]
pub struct RunArgs {
    /// Directory for the timestamped CSV backup
    #[arg(long, default_value = ".")]
    pub backup_dir: PathBuf,

    /// Override the retention window in days
    #[arg(long)]
    pub retention_days: Option<i64>,

    /// Override the pause between ticker requests in seconds
    #[arg(long)]
    pub request_delay_secs: Option<u64>,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            backup_dir: PathBuf::from("."),
            retention_days: None,
            request_delay_secs: None,
        }
    }
}

/// Runs the pipeline once. Only setup failures (bad configuration, HTTP
/// client construction) propagate as errors; per-ticker fetch failures and a
/// failed load step are reported in the summary and exit zero.
pub async fn run(args: &RunArgs) -> Result<()> {
    let mut config = Config::from_env().context("configuration")?;
    if let Some(days) = args.retention_days {
        config.retention_days = days;
    }
    if let Some(secs) = args.request_delay_secs {
        config.request_delay = Duration::from_secs(secs);
    }

    let client = match std::env::var("ALPHAVANTAGE_BASE_URL").ok() {
        Some(url) => Client::with_base_url(&url, config.api_key.clone()),
        None => Client::new(config.api_key.clone()),
    }
    .context("building HTTP client")?;

    let run_started = Local::now();

    eprintln!(
        "Fetching insider transactions for {} tickers",
        config.symbols.len()
    );
    let outcome = fetch_all(&client, &config.symbols, config.request_delay).await;
    let mut summary = RunSummary::from_extraction(&config.symbols, &outcome);

    let cutoff = config.retention_cutoff(run_started.date_naive());
    let (records, transform_summary) = transform(&outcome.batches, cutoff);
    summary.transform = transform_summary;

    // A failed load never blocks the backup of the in-memory records.
    if records.is_empty() {
        eprintln!("No records to load");
    } else {
        match load(&config, &records).await {
            Ok(written) => summary.loaded = Some(written),
            Err(err) => {
                tracing::error!("Load step failed: {}", err);
                summary.load_error = Some(err.to_string());
            }
        }
    }

    match write_backup(&args.backup_dir, &backup_filename(run_started), &records) {
        Ok(path) => summary.backup_path = Some(path),
        Err(err) => {
            tracing::error!("Backup failed: {}", err);
            summary.backup_error = Some(err.to_string());
        }
    }

    println!("{}", crate::output::render_summary(&summary));

    Ok(())
}

async fn load(config: &Config, records: &[InsiderTransaction]) -> Result<u64, PipelineError> {
    let store = Store::connect(&config.database).await?;
    store.init().await?;
    let written = store.upsert_transactions(records).await?;
    store.close().await;
    Ok(written)
}
