//! System endpoints: root greeting and health check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Root greeting with a storage probe.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    message: String,
    database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    database: String,
    timestamp: String,
    version: String,
}

/// `GET /` — Greeting that also reports whether storage answers.
///
/// Always 200; the probe result is in the body.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Root",
    description = "Returns a greeting and the result of a storage connectivity probe.",
    responses(
        (status = 200, description = "Greeting with storage status", body = RootResponse),
    )
)]
pub async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = match state.transaction_service.check_storage().await {
        Ok(()) => RootResponse {
            message: "FX simulator backend is running".to_string(),
            database: "connected".to_string(),
            error: None,
        },
        Err(err) => RootResponse {
            message: "FX simulator backend is running".to_string(),
            database: "unreachable".to_string(),
            error: Some(err.to_string()),
        },
    };
    Json(body)
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns 200 when storage answers and 503 otherwise, with version and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Storage unreachable", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (status, health, database) = match state.transaction_service.check_storage().await {
        Ok(()) => (StatusCode::OK, "healthy", "connected"),
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
        }
    };
    (
        status,
        Json(HealthResponse {
            status: health.to_string(),
            database: database.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}
