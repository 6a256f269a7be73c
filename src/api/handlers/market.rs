//! Market-data relay handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::DailyCandle;
use crate::error::{ErrorResponse, TradeLogError};

/// `GET /daily-chart` — Daily OHLC history for the configured pair.
///
/// # Errors
///
/// Returns [`TradeLogError::MarketDataUnavailable`] when the provider
/// fails.
#[utoipa::path(
    get,
    path = "/daily-chart",
    tag = "Market Data",
    summary = "Daily price history",
    description = "Fetches the full daily series from the market-data provider on every call and returns it oldest first.",
    responses(
        (status = 200, description = "Daily candles, oldest first", body = Vec<DailyCandle>),
        (status = 502, description = "Provider unavailable", body = ErrorResponse),
    )
)]
pub async fn daily_chart(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, TradeLogError> {
    let candles = state.market_data.daily_series().await?;
    Ok(Json(candles))
}

/// Market-data routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/daily-chart", get(daily_chart))
}
