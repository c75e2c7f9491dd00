//! Runtime configuration sourced from the process environment.
//!
//! Every required value is validated up front so a misconfigured run fails
//! before the first network call, naming the variable at fault.

use std::time::Duration;

use chrono::NaiveDate;

use crate::error::PipelineError;

/// Tickers tracked when `SYMBOLS` is not set.
pub const DEFAULT_SYMBOLS: &[&str] = &["IBM", "AAPL", "MSFT", "GOOGL"];

/// Retention window when `RETENTION_DAYS` is not set (two years).
pub const DEFAULT_RETENTION_DAYS: i64 = 2 * 365;

/// Pause between ticker requests when `REQUEST_DELAY_SECS` is not set.
/// Sized for the free-tier Alpha Vantage quota of 5 requests per minute.
pub const DEFAULT_REQUEST_DELAY_SECS: u64 = 12;

const DEFAULT_DB_NAME: &str = "postgres";
const DEFAULT_DB_PORT: u16 = 6543;

/// How to reach Postgres: a full connection URL (`SUPABASE_URL`, preferred
/// when set) or discrete host/user/password/database/port parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    Url(String),
    Params {
        host: String,
        user: String,
        password: String,
        database: String,
        port: u16,
    },
}

/// Validated pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub database: DatabaseConfig,
    pub symbols: Vec<String>,
    pub retention_days: i64,
    pub request_delay: Duration,
}

impl Config {
    /// Reads and validates configuration from the process environment.
    pub fn from_env() -> Result<Self, PipelineError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, PipelineError> {
        let api_key = require(&get, "API_KEY")?;
        let database = database_config(&get)?;

        let symbols = match get("SYMBOLS") {
            Some(raw) => parse_symbols(&raw)?,
            None => DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        };

        let retention_days = match get("RETENTION_DAYS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|days| *days > 0)
                .ok_or_else(|| invalid("RETENTION_DAYS must be a positive integer"))?,
            None => DEFAULT_RETENTION_DAYS,
        };

        let request_delay = match get("REQUEST_DELAY_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| invalid("REQUEST_DELAY_SECS must be a non-negative integer"))?,
            None => Duration::from_secs(DEFAULT_REQUEST_DELAY_SECS),
        };

        Ok(Self {
            api_key,
            database,
            symbols,
            retention_days,
            request_delay,
        })
    }

    /// First calendar date still inside the retention window for a run dated
    /// `run_date`. The boundary date itself is retained.
    pub fn retention_cutoff(&self, run_date: NaiveDate) -> NaiveDate {
        run_date - chrono::Duration::days(self.retention_days)
    }
}

fn require(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String, PipelineError> {
    get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| invalid(&format!("{} is not set", key)))
}

fn database_config(
    get: &impl Fn(&str) -> Option<String>,
) -> Result<DatabaseConfig, PipelineError> {
    if let Some(url) = get("SUPABASE_URL").filter(|value| !value.trim().is_empty()) {
        return Ok(DatabaseConfig::Url(url.trim().to_string()));
    }

    if get("SUPABASE_HOST").map_or(true, |value| value.trim().is_empty()) {
        return Err(invalid(
            "set SUPABASE_URL, or SUPABASE_HOST with SUPABASE_USER and SUPABASE_PASSWORD",
        ));
    }

    let host = require(get, "SUPABASE_HOST")?;
    let user = require(get, "SUPABASE_USER")?;
    let password = require(get, "SUPABASE_PASSWORD")?;
    let database = get("SUPABASE_DATABASE")
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
    let port = match get("SUPABASE_PORT") {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| invalid("SUPABASE_PORT must be a valid port number"))?,
        None => DEFAULT_DB_PORT,
    };

    Ok(DatabaseConfig::Params {
        host,
        user,
        password,
        database,
        port,
    })
}

fn parse_symbols(raw: &str) -> Result<Vec<String>, PipelineError> {
    let symbols: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect();
    if symbols.is_empty() {
        return Err(invalid("SYMBOLS is set but contains no ticker symbols"));
    }
    if let Some(bad) = symbols.iter().find(|s| s.len() > 10) {
        return Err(invalid(&format!(
            "SYMBOLS entry '{}' exceeds the 10-character ticker limit",
            bad
        )));
    }
    Ok(symbols)
}

fn invalid(msg: &str) -> PipelineError {
    PipelineError::InvalidConfig(msg.to_string())
}
