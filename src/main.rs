//! fx-trade-log server entry point.
//!
//! Starts the Axum HTTP server with the transaction and daily-chart
//! endpoints.

use std::sync::Arc;

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use fx_trade_log::api;
use fx_trade_log::app_state::AppState;
use fx_trade_log::config::{AppConfig, LogFormat};
use fx_trade_log::market_data::{AlphaVantageClient, MarketDataSource};
use fx_trade_log::persistence::{
    InMemoryTransactionStore, PostgresTransactionStore, TransactionStore,
};
use fx_trade_log::service::TransactionService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting fx-trade-log");

    // Build storage layer
    let store: Arc<dyn TransactionStore> = if config.persistence_enabled {
        let store = PostgresTransactionStore::connect(&config)
            .await
            .context("connecting to PostgreSQL")?;
        store.migrate().await.context("applying migrations")?;
        tracing::info!("using PostgreSQL transaction store");
        Arc::new(store)
    } else {
        tracing::warn!("persistence disabled; transactions are kept in memory");
        Arc::new(InMemoryTransactionStore::new())
    };

    // Build service layer
    let transaction_service = Arc::new(TransactionService::new(store));
    let market_data: Arc<dyn MarketDataSource> =
        Arc::new(AlphaVantageClient::from_config(&config).context("building market data client")?);
    if config.alpha_vantage_api_key.is_none() {
        tracing::warn!("ALPHA_VANTAGE_API_KEY not set; /daily-chart will fail");
    }

    // Build application state
    let app_state = AppState {
        transaction_service,
        market_data,
    };

    // Build router
    let app = api::build_router();
    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
        )
    };
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(api::cors_layer(&config.cors_allowed_origins))
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
