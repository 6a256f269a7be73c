//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::api::dto::{ClearTransactionsResponse, CreateTransactionRequest};
use crate::api::handlers::{market, system, transaction};
use crate::domain::{DailyCandle, TradeType, Transaction};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI description, served by Swagger UI when the
/// `swagger-ui` feature is on.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "fx-trade-log",
        description = "Trade log and daily price relay for an FX trading simulator."
    ),
    paths(
        transaction::create_transaction,
        transaction::list_transactions,
        transaction::clear_transactions,
        market::daily_chart,
        system::root_handler,
        system::health_handler,
    ),
    components(schemas(
        Transaction,
        TradeType,
        CreateTransactionRequest,
        ClearTransactionsResponse,
        DailyCandle,
        ErrorResponse,
        ErrorBody,
        system::RootResponse,
        system::HealthResponse,
    )),
    tags(
        (name = "Transactions", description = "Trade history"),
        (name = "Market Data", description = "Relayed daily prices"),
        (name = "System", description = "Liveness and health"),
    )
)]
pub struct ApiDoc;
