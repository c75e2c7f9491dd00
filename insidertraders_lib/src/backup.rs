//! Timestamped CSV backups of the transformed sequence.
//!
//! The backup is written after the database step from the in-memory records,
//! whatever the load outcome was.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::model::InsiderTransaction;

#[derive(thiserror::Error, Debug)]
pub enum BackupError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Backup name for a run started at `run_started`, local time:
/// `insider_transactions_YYYYmmdd_HHMM.csv`. Runs started in the same minute
/// share a name and the later one overwrites.
pub fn backup_filename(run_started: DateTime<Local>) -> String {
    format!(
        "insider_transactions_{}.csv",
        run_started.format("%Y%m%d_%H%M")
    )
}

/// Writes one CSV row per record, with a header row, to `dir/filename`,
/// creating the directory if needed. Returns the path written.
pub fn write_backup(
    dir: &Path,
    filename: &str,
    records: &[InsiderTransaction],
) -> Result<PathBuf, BackupError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);

    let mut writer = csv::Writer::from_path(&path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!("Backup saved to {}", path.display());
    Ok(path)
}
