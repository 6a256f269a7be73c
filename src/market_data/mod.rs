//! Market-data relay: daily OHLC history from an external provider.
//!
//! Independent of the transaction core. Every call goes upstream; nothing
//! is cached.

pub mod alpha_vantage;

use std::fmt;

use async_trait::async_trait;

pub use alpha_vantage::AlphaVantageClient;

use crate::domain::DailyCandle;
use crate::error::TradeLogError;

/// Source of daily price bars for the configured currency pair.
#[async_trait]
pub trait MarketDataSource: Send + Sync + fmt::Debug {
    /// Returns the full daily history, oldest bar first.
    ///
    /// # Errors
    ///
    /// Returns [`TradeLogError::MarketDataUnavailable`] if the provider
    /// cannot be reached, rejects the request, or returns malformed data.
    async fn daily_series(&self) -> Result<Vec<DailyCandle>, TradeLogError>;
}
