//! Error types for the library layer.

use std::fmt;

use crate::backup::BackupError;

/// Errors produced by the library layer, wrapping upstream API and database
/// failures and adding backup and configuration errors.
#[derive(Debug)]
pub enum PipelineError {
    /// An error from the underlying API client.
    Api(alphavantage_api::Error),
    /// A database operation failed.
    Db(sqlx::Error),
    /// Writing the backup artifact failed.
    Backup(BackupError),
    /// Required configuration is missing or malformed.
    InvalidConfig(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Db(e) => write!(f, "Database error: {}", e),
            Self::Backup(e) => write!(f, "Backup error: {}", e),
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Db(e) => Some(e),
            Self::Backup(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<alphavantage_api::Error> for PipelineError {
    fn from(e: alphavantage_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<sqlx::Error> for PipelineError {
    fn from(e: sqlx::Error) -> Self {
        Self::Db(e)
    }
}

impl From<BackupError> for PipelineError {
    fn from(e: BackupError) -> Self {
        Self::Backup(e)
    }
}
