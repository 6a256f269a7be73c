//! Transaction service: validation and client-facing ordering.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::domain::{CreateTransaction, Transaction};
use crate::error::TradeLogError;
use crate::persistence::TransactionStore;

/// Business rules on top of a [`TransactionStore`].
///
/// The store hands records back in insertion order. This service re-sorts
/// every page newest first before returning it; that ordering is part of
/// the contract clients rely on. Storage errors pass through unchanged and
/// are never retried here.
#[derive(Debug, Clone)]
pub struct TransactionService {
    store: Arc<dyn TransactionStore>,
}

impl TransactionService {
    /// Creates a service over the given storage handle.
    #[must_use]
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    /// Validates the input and records a new transaction.
    ///
    /// # Errors
    ///
    /// Returns [`TradeLogError::Validation`] for malformed input and
    /// [`TradeLogError::StorageUnavailable`] if the store cannot be reached.
    pub async fn create(&self, input: CreateTransaction) -> Result<Transaction, TradeLogError> {
        let new = input.validate()?;
        let tx = self.store.insert(new).await?;
        tracing::info!(
            id = %tx.id,
            pair = %tx.pair,
            trade_type = %tx.trade_type,
            closes = ?tx.opening_trade_id,
            "transaction recorded"
        );
        Ok(tx)
    }

    /// Returns one page of transactions, most recent first.
    ///
    /// The page is cut from the store in insertion order and then sorted by
    /// timestamp descending, higher id first on equal timestamps. Once the
    /// history holds more than `skip + limit` records, the newest ones fall
    /// outside the window: with `skip = 0` the page shows the oldest `limit`
    /// records, reversed.
    ///
    /// # Errors
    ///
    /// Returns [`TradeLogError::StorageUnavailable`] if the store cannot be
    /// reached.
    pub async fn list_recent(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, TradeLogError> {
        let mut page = self.store.list(skip, limit).await?;
        page.sort_by(newest_first);
        Ok(page)
    }

    /// Removes every transaction and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`TradeLogError::StorageUnavailable`] if the store cannot be
    /// reached.
    pub async fn clear_all(&self) -> Result<u64, TradeLogError> {
        let deleted = self.store.delete_all().await?;
        tracing::info!(deleted, "transaction history cleared");
        Ok(deleted)
    }

    /// Probes the underlying store.
    ///
    /// # Errors
    ///
    /// Returns [`TradeLogError::StorageUnavailable`] if the store cannot be
    /// reached.
    pub async fn check_storage(&self) -> Result<(), TradeLogError> {
        self.store.ping().await
    }
}

fn newest_first(a: &Transaction, b: &Transaction) -> Ordering {
    b.timestamp.cmp(&a.timestamp).then_with(|| b.id.cmp(&a.id))
}
