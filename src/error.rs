//! Service error types with HTTP status code mapping.
//!
//! [`TradeLogError`] is the single error type shared by the store, the
//! service and the HTTP layer. Each variant maps to a specific HTTP status
//! code and structured JSON error response.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "validation failed: price must be a positive number",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status                  |
/// |-----------|------------|------------------------------|
/// | 1000–1999 | Validation | 400 Bad Request              |
/// | 3000–3999 | Server     | 500 / 502 / 503              |
#[derive(Debug, thiserror::Error)]
pub enum TradeLogError {
    /// Malformed creation input.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The durable store could not be reached or rejected the statement.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The upstream market-data provider failed or returned garbage.
    #[error("market data unavailable: {0}")]
    MarketDataUnavailable(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TradeLogError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::Internal(_) => 3000,
            Self::StorageUnavailable(_) => 3001,
            Self::MarketDataUnavailable(_) => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::MarketDataUnavailable(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for TradeLogError {
    fn from(err: sqlx::Error) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}

impl From<reqwest::Error> for TradeLogError {
    fn from(err: reqwest::Error) -> Self {
        Self::MarketDataUnavailable(err.to_string())
    }
}

impl From<JsonRejection> for TradeLogError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for TradeLogError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for TradeLogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(code = self.error_code(), error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = TradeLogError::Validation("pair must not be empty".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), 1001);
    }

    #[test]
    fn storage_maps_to_service_unavailable() {
        let err = TradeLogError::StorageUnavailable("connection refused".to_string());
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            err.to_string(),
            "storage unavailable: connection refused"
        );
    }

    #[test]
    fn sqlx_errors_become_storage_unavailable() {
        let err = TradeLogError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, TradeLogError::StorageUnavailable(_)));
    }

    #[test]
    fn response_carries_status() {
        let response =
            TradeLogError::MarketDataUnavailable("rate limited".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
