//! In-memory transaction store.
//!
//! [`InMemoryTransactionStore`] keeps records in a vector behind a
//! [`tokio::sync::RwLock`]. Every operation takes the lock once, so each
//! one is atomic with respect to the others, matching the single-statement
//! semantics of the Postgres store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::TransactionStore;
use crate::domain::{NewTransaction, Transaction, TransactionId};
use crate::error::TradeLogError;

/// Process-local transaction store.
///
/// Ids start at 1 and keep increasing across [`TransactionStore::delete_all`]
/// calls, like a `BIGSERIAL` sequence.
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    state: RwLock<StoreState>,
}

#[derive(Debug, Default)]
struct StoreState {
    records: Vec<Transaction>,
    last_id: i64,
    last_timestamp: Option<DateTime<Utc>>,
}

impl InMemoryTransactionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    /// Returns `true` if no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.records.is_empty()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn insert(&self, new: NewTransaction) -> Result<Transaction, TradeLogError> {
        let mut state = self.state.write().await;

        let next_id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| TradeLogError::Internal("transaction id space exhausted".to_string()))?;

        // A wall clock step backwards must not reorder ids and timestamps.
        let now = Utc::now();
        let timestamp = state.last_timestamp.map_or(now, |last| last.max(now));

        let record = new.into_stored(TransactionId::new(next_id), timestamp);
        state.last_id = next_id;
        state.last_timestamp = Some(timestamp);
        state.records.push(record.clone());
        Ok(record)
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Transaction>, TradeLogError> {
        let state = self.state.read().await;
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(state.records.iter().skip(skip).take(limit).cloned().collect())
    }

    async fn delete_all(&self) -> Result<u64, TradeLogError> {
        let mut state = self.state.write().await;
        let removed = state.records.len();
        state.records.clear();
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }

    async fn ping(&self) -> Result<(), TradeLogError> {
        Ok(())
    }
}
