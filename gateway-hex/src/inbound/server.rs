//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use gateway_types::{PaymentProcessorPort, TransactionLoggerPort};

use super::handlers::{self, AppState};
use crate::PaymentService;

/// HTTP Server for the payment gateway API.
pub struct HttpServer<P, L> {
    state: Arc<AppState<P, L>>,
}

impl<P, L> HttpServer<P, L>
where
    P: PaymentProcessorPort,
    L: TransactionLoggerPort,
{
    /// Creates a new HTTP server with the given service.
    pub fn new(service: PaymentService<P, L>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Uses the globally set MeterProvider, a no-op unless OTLP export is configured
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .route("/health", get(handlers::health))
            .route("/api-docs/openapi.json", get(handlers::openapi_json))
            .route("/api/pay", post(handlers::create_payment::<P, L>))
            .route("/api/pay/{id}", get(handlers::get_payment::<P, L>))
            .route(
                "/api/pay/{id}/refund",
                post(handlers::refund_payment::<P, L>),
            )
            .route(
                "/api/pay/{id}/transactions",
                get(handlers::list_transactions::<P, L>),
            )
            .layer(metrics)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Serves on an already bound listener until a shutdown signal arrives.
    pub async fn serve(self, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
