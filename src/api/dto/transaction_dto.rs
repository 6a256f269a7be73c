//! Transaction request/response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{CreateTransaction, TransactionId};

/// Default page size for `GET /transactions`.
pub const DEFAULT_LIST_LIMIT: u64 = 100;

/// Largest page size a single request may ask for.
pub const MAX_LIST_LIMIT: u64 = 1000;

/// Request body for `POST /transactions`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTransactionRequest {
    /// Traded instrument.
    #[schema(example = "USD_JPY")]
    pub pair: String,
    /// `buy` or `sell` (case-insensitive; `ASK`/`BID` accepted).
    #[schema(example = "buy")]
    pub trade_type: String,
    /// Trade quantity.
    #[schema(example = 1000.0)]
    pub amount: f64,
    /// Execution price.
    #[schema(example = 149.5)]
    pub price: f64,
    /// Realized profit, for closing trades only.
    #[serde(default)]
    pub profit: Option<f64>,
    /// Id of the trade being closed.
    #[serde(default)]
    pub opening_trade_id: Option<i64>,
}

impl From<CreateTransactionRequest> for CreateTransaction {
    fn from(req: CreateTransactionRequest) -> Self {
        Self {
            pair: req.pair,
            trade_type: req.trade_type,
            amount: req.amount,
            price: req.price,
            profit: req.profit,
            opening_trade_id: req.opening_trade_id.map(TransactionId::new),
        }
    }
}

/// Offset pagination for `GET /transactions`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTransactionsParams {
    /// Records to skip, in insertion order. Defaults to 0.
    #[serde(default)]
    pub skip: u64,
    /// Records to return. Defaults to 100, capped at 1000.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_LIST_LIMIT
}

impl ListTransactionsParams {
    /// Caps `limit` at [`MAX_LIST_LIMIT`].
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            skip: self.skip,
            limit: self.limit.min(MAX_LIST_LIMIT),
        }
    }
}

/// Response body for `DELETE /transactions`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClearTransactionsResponse {
    /// Number of records removed.
    pub deleted: u64,
    /// Human-readable confirmation.
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_to_none() {
        let Ok(req) = serde_json::from_str::<CreateTransactionRequest>(
            r#"{"pair":"USD_JPY","trade_type":"buy","amount":1000,"price":149.5}"#,
        ) else {
            panic!("request should deserialize");
        };
        assert!(req.profit.is_none());
        assert!(req.opening_trade_id.is_none());

        let input = CreateTransaction::from(req);
        assert_eq!(input.amount, 1000.0);
    }

    #[test]
    fn explicit_nulls_are_accepted() {
        let Ok(req) = serde_json::from_str::<CreateTransactionRequest>(
            r#"{"pair":"USD/JPY","trade_type":"ASK","amount":10000,"price":150.1,
                "profit":null,"opening_trade_id":null}"#,
        ) else {
            panic!("request should deserialize");
        };
        assert!(req.profit.is_none());
    }

    #[test]
    fn limit_is_clamped() {
        let params = ListTransactionsParams {
            skip: 3,
            limit: 50_000,
        };
        let clamped = params.clamped();
        assert_eq!(clamped.skip, 3);
        assert_eq!(clamped.limit, MAX_LIST_LIMIT);
    }
}
