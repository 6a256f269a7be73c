//! Service layer: business rules above the raw store.
//!
//! [`TransactionService`] validates creation input and orders listings
//! newest first. It owns no state besides the injected storage handle.

pub mod transaction_service;

pub use transaction_service::TransactionService;
