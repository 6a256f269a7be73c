//! Transaction handlers: create, list, clear.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{ClearTransactionsResponse, CreateTransactionRequest, ListTransactionsParams};
use crate::app_state::AppState;
use crate::domain::Transaction;
use crate::error::{ErrorResponse, TradeLogError};

/// `POST /transactions` — Record a trade.
///
/// # Errors
///
/// Returns [`TradeLogError::Validation`] on malformed input and
/// [`TradeLogError::StorageUnavailable`] when the store is down.
#[utoipa::path(
    post,
    path = "/transactions",
    tag = "Transactions",
    summary = "Record a trade",
    description = "Stores a buy or sell record. The id and timestamp are assigned by the server. Closing trades may carry `profit` and the `opening_trade_id` they close.",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transaction recorded", body = Transaction),
        (status = 400, description = "Invalid transaction", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TradeLogError> {
    let Json(req) = payload?;
    let tx = state.transaction_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(tx)))
}

/// `GET /transactions` — List trades, most recent first.
///
/// # Errors
///
/// Returns [`TradeLogError::Validation`] on an unparsable query string and
/// [`TradeLogError::StorageUnavailable`] when the store is down.
#[utoipa::path(
    get,
    path = "/transactions",
    tag = "Transactions",
    summary = "List trades",
    description = "Cuts a `skip`/`limit` window from the history in insertion order and returns it sorted by timestamp, newest first. Records past `skip + limit` in insertion order are not returned, so a full history needs a larger `skip` or `limit` to reach the newest trades.",
    params(ListTransactionsParams),
    responses(
        (status = 200, description = "Transactions, newest first", body = Vec<Transaction>),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn list_transactions(
    State(state): State<AppState>,
    query: Result<Query<ListTransactionsParams>, QueryRejection>,
) -> Result<impl IntoResponse, TradeLogError> {
    let Query(params) = query?;
    let params = params.clamped();
    let page = state
        .transaction_service
        .list_recent(params.skip, params.limit)
        .await?;
    Ok(Json(page))
}

/// `DELETE /transactions` — Wipe the trade history.
///
/// # Errors
///
/// Returns [`TradeLogError::StorageUnavailable`] when the store is down.
#[utoipa::path(
    delete,
    path = "/transactions",
    tag = "Transactions",
    summary = "Clear all trades",
    description = "Removes every recorded transaction. Succeeds on an empty history.",
    responses(
        (status = 200, description = "History cleared", body = ClearTransactionsResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn clear_transactions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, TradeLogError> {
    let deleted = state.transaction_service.clear_all().await?;
    Ok(Json(ClearTransactionsResponse {
        deleted,
        message: format!("deleted {deleted} transactions"),
    }))
}

/// Transaction routes. The trailing-slash form is kept for clients
/// that call the `/transactions/` form.
pub fn routes() -> Router<AppState> {
    let collection = post(create_transaction)
        .get(list_transactions)
        .delete(clear_transactions);
    Router::new()
        .route("/transactions", collection.clone())
        .route("/transactions/", collection)
}
