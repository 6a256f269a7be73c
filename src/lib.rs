//! # fx-trade-log
//!
//! Transaction log and daily price relay backend for an FX trading
//! simulator.
//!
//! The core is the transaction contract: a store that assigns ids and
//! timestamps and keeps records in insertion order, and a service that
//! validates input and serves listings newest first. The daily-chart relay
//! and the HTTP layer sit around it.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── TransactionService (service/)
//!     ├── MarketDataSource (market_data/) ── Alpha Vantage
//!     │
//!     └── TransactionStore (persistence/)
//!           ├── PostgreSQL
//!           └── in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod market_data;
pub mod persistence;
pub mod service;
