//! # Payment Gateway Simulator
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize tracing, with optional OTLP export
//! - Build the in-memory processor and console transaction logger
//! - Create the payment service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use gateway_adapters::{
    ConsoleTransactionLogger, InMemoryPaymentProcessor, RecordingTransactionLogger,
};
use gateway_hex::{PaymentService, inbound::HttpServer};

use config::{Config, LogFormat};

fn init_tracer(
    endpoint: &str,
) -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("payment-gateway-simulator"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    let (telemetry, otel_provider) = match config.otlp_endpoint.as_deref() {
        Some(endpoint) => {
            let (tracer, provider) = init_tracer(endpoint)?;
            (
                Some(tracing_opentelemetry::layer().with_tracer(tracer)),
                Some(provider),
            )
        }
        None => (None, None),
    };

    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer().boxed(),
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gateway_app=debug,gateway_hex=debug".into()),
        )
        .with(telemetry)
        .init();

    tracing::info!("Starting payment gateway simulator on {}", config.bind_addr());
    if let Some(endpoint) = &config.otlp_endpoint {
        tracing::info!("Exporting traces to {}", endpoint);
    }

    // Adapters are picked here; the core only sees the ports
    let processor = InMemoryPaymentProcessor::new();
    let logger = RecordingTransactionLogger::new(ConsoleTransactionLogger::new(
        config.transaction_log_pretty,
    ));

    // Create the payment service
    let service = PaymentService::new(processor, logger);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    server.run(&config.bind_addr()).await?;

    // Ensure traces are flushed before exit
    if let Some(provider) = otel_provider {
        if let Err(e) = provider.shutdown() {
            tracing::warn!(error = %e, "Failed to flush traces");
        }
    }
    Ok(())
}
