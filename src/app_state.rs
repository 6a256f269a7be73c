//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::market_data::MarketDataSource;
use crate::service::TransactionService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Transaction service for create/list/clear.
    pub transaction_service: Arc<TransactionService>,
    /// Daily price relay behind `/daily-chart`.
    pub market_data: Arc<dyn MarketDataSource>,
}
