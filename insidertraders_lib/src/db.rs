//! Postgres storage for normalized insider transactions.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::Row;

use crate::config::DatabaseConfig;
use crate::model::InsiderTransaction;

// One batch write at a time; a single connection is all the pipeline needs.
const MAX_CONNECTIONS: u32 = 1;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS insider_transactions (
    id SERIAL PRIMARY KEY,
    symbol VARCHAR(10) NOT NULL,
    date DATE NOT NULL,
    executive VARCHAR(100),
    title VARCHAR(100),
    type VARCHAR(50),
    transaction VARCHAR(50),
    shares DECIMAL(10, 2),
    price DECIMAL(10, 2) NOT NULL DEFAULT 0.00,
    UNIQUE (symbol, date, executive, shares, price)
)";

const UPSERT: &str = "\
INSERT INTO insider_transactions
    (symbol, date, executive, title, type, transaction, shares, price)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
ON CONFLICT (symbol, date, executive, shares, price) DO UPDATE SET
    title = EXCLUDED.title,
    type = EXCLUDED.type,
    transaction = EXCLUDED.transaction";

pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Connects using either the full connection URL or discrete parameters.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT);

        let pool = match config {
            DatabaseConfig::Url(url) => options.connect(url).await?,
            DatabaseConfig::Params {
                host,
                user,
                password,
                database,
                port,
            } => {
                let connect = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .password(password)
                    .database(database);
                options.connect_with(connect).await?
            }
        };

        Ok(Self { pool })
    }

    /// Get a reference to the underlying pool (for integration tests).
    #[doc(hidden)]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the table and its natural-key constraint if absent.
    pub async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Upserts the batch inside one transaction, keyed on
    /// `(symbol, date, executive, shares, price)`. On conflict the existing
    /// row's non-key fields are overwritten, so re-running the same batch
    /// leaves the table unchanged. Returns the number of rows written.
    pub async fn upsert_transactions(
        &self,
        records: &[InsiderTransaction],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let mut written = 0u64;

        for record in records {
            let result = sqlx::query(UPSERT)
                .bind(&record.symbol)
                .bind(record.date)
                .bind(&record.executive)
                .bind(&record.title)
                .bind(&record.security_type)
                .bind(&record.transaction)
                .bind(record.shares)
                .bind(record.price)
                .execute(&mut *tx)
                .await?;
            written += result.rows_affected();
        }

        tx.commit().await?;
        tracing::info!("Upserted {} insider transactions", written);
        Ok(written)
    }

    pub async fn transaction_count(&self) -> Result<i64, sqlx::Error> {
        let row = sqlx::query("SELECT COUNT(*) FROM insider_transactions")
            .fetch_one(&self.pool)
            .await?;
        row.try_get(0)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
