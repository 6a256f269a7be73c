//! Daily OHLC bar relayed from the market-data provider.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One trading day of the configured currency pair.
///
/// `time` serializes as `"YYYY-MM-DD"`, the format chart widgets expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyCandle {
    /// Trading day.
    #[schema(value_type = String, example = "2024-01-02")]
    pub time: NaiveDate,
    /// Opening rate.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Closing rate.
    pub close: f64,
}
