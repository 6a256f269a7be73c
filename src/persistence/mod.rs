//! Persistence layer: durable storage of transaction records.
//!
//! [`TransactionStore`] is the storage-handle seam the service is built
//! on. It returns records in storage (insertion) order and never sorts;
//! ordering for presentation belongs to the service.
//!
//! Two implementations:
//!
//! - [`PostgresTransactionStore`] backed by `sqlx::PgPool`.
//! - [`InMemoryTransactionStore`] for runs with persistence disabled and
//!   for tests.

#[cfg(test)]
#[allow(clippy::panic)]
mod contract;
pub mod memory;
pub mod models;
pub mod postgres;

use std::fmt;

use async_trait::async_trait;

pub use memory::InMemoryTransactionStore;
pub use postgres::PostgresTransactionStore;

use crate::domain::{NewTransaction, Transaction};
use crate::error::TradeLogError;

/// Durable, ordered storage of [`Transaction`] records.
///
/// Every method is its own unit of work. Isolation between concurrent
/// callers is whatever the backing engine provides.
#[async_trait]
pub trait TransactionStore: Send + Sync + fmt::Debug {
    /// Assigns a fresh id and the current timestamp, persists the record
    /// and returns it with the generated fields filled in.
    ///
    /// # Errors
    ///
    /// Returns [`TradeLogError::StorageUnavailable`] if the store cannot
    /// be reached. Nothing is persisted in that case.
    async fn insert(&self, new: NewTransaction) -> Result<Transaction, TradeLogError>;

    /// Returns up to `limit` records after skipping `skip`, in insertion
    /// order. Empty when `skip` is past the end or `limit` is zero.
    ///
    /// # Errors
    ///
    /// Returns [`TradeLogError::StorageUnavailable`] if the store cannot
    /// be reached.
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Transaction>, TradeLogError>;

    /// Removes every record and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`TradeLogError::StorageUnavailable`] if the store cannot
    /// be reached.
    async fn delete_all(&self) -> Result<u64, TradeLogError>;

    /// Cheap connectivity probe.
    ///
    /// # Errors
    ///
    /// Returns [`TradeLogError::StorageUnavailable`] if the store cannot
    /// be reached.
    async fn ping(&self) -> Result<(), TradeLogError>;
}
