//! Data Transfer Objects for REST request/response serialization.
//!
//! Stored records and candles are serialized straight from the domain
//! types; only request shapes and confirmations live here.

pub mod transaction_dto;

pub use transaction_dto::*;
