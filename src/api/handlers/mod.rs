//! REST endpoint handlers organized by resource.

pub mod market;
pub mod system;
pub mod transaction;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(transaction::routes())
        .merge(market::routes())
}
