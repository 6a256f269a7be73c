//! Alpha Vantage `FX_DAILY` client.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use super::MarketDataSource;
use crate::config::AppConfig;
use crate::domain::DailyCandle;
use crate::error::TradeLogError;

/// Raw `FX_DAILY` payload. On failure the provider still answers 200 and
/// puts the reason in one of the message fields instead of the series.
#[derive(Debug, Deserialize)]
struct FxDailyResponse {
    #[serde(rename = "Time Series FX (Daily)")]
    series: Option<BTreeMap<String, RawBar>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawBar {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
}

/// HTTP client for the Alpha Vantage daily FX series.
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    from_symbol: String,
    to_symbol: String,
}

impl AlphaVantageClient {
    /// Builds a client from the relay section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TradeLogError::Internal`] if the HTTP client cannot be
    /// constructed (e.g. no TLS backend).
    pub fn from_config(config: &AppConfig) -> Result<Self, TradeLogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.market_data_timeout_secs))
            .build()
            .map_err(|e| TradeLogError::Internal(format!("http client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.alpha_vantage_base_url.trim_end_matches('/').to_string(),
            api_key: config.alpha_vantage_api_key.clone(),
            from_symbol: config.market_data_from_symbol.clone(),
            to_symbol: config.market_data_to_symbol.clone(),
        })
    }
}

#[async_trait]
impl MarketDataSource for AlphaVantageClient {
    async fn daily_series(&self) -> Result<Vec<DailyCandle>, TradeLogError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(TradeLogError::MarketDataUnavailable(
                "ALPHA_VANTAGE_API_KEY is not configured".to_string(),
            ));
        };

        tracing::debug!(
            from = %self.from_symbol,
            to = %self.to_symbol,
            "fetching daily fx series"
        );

        let response = self
            .client
            .get(format!("{}/query", self.base_url))
            .query(&[
                ("function", "FX_DAILY"),
                ("from_symbol", self.from_symbol.as_str()),
                ("to_symbol", self.to_symbol.as_str()),
                ("outputsize", "full"),
                ("apikey", api_key),
            ])
            .send()
            .await?
            .error_for_status()?;

        let payload: FxDailyResponse = response.json().await?;
        let candles = reshape(payload)?;
        tracing::info!(bars = candles.len(), "daily fx series relayed");
        Ok(candles)
    }
}

/// Turns the provider payload into date-ordered candles.
fn reshape(payload: FxDailyResponse) -> Result<Vec<DailyCandle>, TradeLogError> {
    if let Some(reason) = payload
        .error_message
        .or(payload.note)
        .or(payload.information)
    {
        return Err(TradeLogError::MarketDataUnavailable(reason));
    }

    let series = payload.series.ok_or_else(|| {
        TradeLogError::MarketDataUnavailable("response carries no daily series".to_string())
    })?;

    // `YYYY-MM-DD` keys sort chronologically, so map order is date order.
    series
        .into_iter()
        .map(|(day, bar)| {
            Ok(DailyCandle {
                time: NaiveDate::parse_from_str(&day, "%Y-%m-%d").map_err(|e| {
                    TradeLogError::MarketDataUnavailable(format!("bad date {day:?}: {e}"))
                })?,
                open: parse_rate(&day, "open", &bar.open)?,
                high: parse_rate(&day, "high", &bar.high)?,
                low: parse_rate(&day, "low", &bar.low)?,
                close: parse_rate(&day, "close", &bar.close)?,
            })
        })
        .collect()
}

fn parse_rate(day: &str, field: &str, raw: &str) -> Result<f64, TradeLogError> {
    raw.trim().parse::<f64>().map_err(|_| {
        TradeLogError::MarketDataUnavailable(format!("bad {field} {raw:?} on {day}"))
    })
}
