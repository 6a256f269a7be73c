//! PostgreSQL implementation of the transaction store.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::TransactionStore;
use super::models::TransactionRow;
use crate::config::AppConfig;
use crate::domain::{NewTransaction, Transaction};
use crate::error::TradeLogError;

/// PostgreSQL-backed transaction store using `sqlx::PgPool`.
///
/// Each operation is a single statement, so each runs in its own implicit
/// transaction. Connections are checked out of the pool per statement.
#[derive(Debug, Clone)]
pub struct PostgresTransactionStore {
    pool: PgPool,
}

impl PostgresTransactionStore {
    /// Creates a store on top of an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool sized from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TradeLogError::StorageUnavailable`] if the database
    /// cannot be reached within the configured timeout.
    pub async fn connect(config: &AppConfig) -> Result<Self, TradeLogError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`TradeLogError::StorageUnavailable`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), TradeLogError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| TradeLogError::StorageUnavailable(e.to_string()))
    }
}

#[async_trait]
impl TransactionStore for PostgresTransactionStore {
    async fn insert(&self, new: NewTransaction) -> Result<Transaction, TradeLogError> {
        let row = sqlx::query_as::<_, TransactionRow>(
            "INSERT INTO transactions (pair, trade_type, amount, price, profit, opening_trade_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, pair, trade_type, amount, price, timestamp, profit, opening_trade_id",
        )
        .bind(&new.pair)
        .bind(new.trade_type.as_str())
        .bind(new.amount)
        .bind(new.price)
        .bind(new.profit)
        .bind(new.opening_trade_id.map(i64::from))
        .fetch_one(&self.pool)
        .await?;

        Transaction::try_from(row)
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Transaction>, TradeLogError> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            "SELECT id, pair, trade_type, amount, price, timestamp, profit, opening_trade_id \
             FROM transactions ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(saturating_i64(limit))
        .bind(saturating_i64(skip))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Transaction::try_from).collect()
    }

    async fn delete_all(&self) -> Result<u64, TradeLogError> {
        let result = sqlx::query("DELETE FROM transactions")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), TradeLogError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Postgres `LIMIT`/`OFFSET` take `BIGINT`; anything larger means "all".
fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
