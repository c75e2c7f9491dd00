//! Library layer for the insider-transactions pipeline: configuration,
//! extraction, normalization, and persistence shared by the CLI.
//!
//! Wraps the `alphavantage_api` crate with request pacing, record
//! normalization, the natural-key Postgres upsert, and the CSV backup writer.

pub mod backup;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod model;
pub mod report;
pub mod transform;

pub use alphavantage_api;
pub use alphavantage_api::types::RawInsiderTransaction;

pub use backup::{backup_filename, write_backup, BackupError};
pub use config::{Config, DatabaseConfig};
pub use db::Store;
pub use error::PipelineError;
pub use extract::{fetch_all, ExtractOutcome, FetchFailure, TickerBatch};
pub use model::{InsiderTransaction, TransactionKey};
pub use report::{RunSummary, TickerReport};
pub use transform::{transform, TransformSummary};
