//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use gateway_types::domain::PaymentStatus;
use gateway_types::dto::{CreatePaymentRequest, PaymentResponse, RefundRequest};
use utoipa::OpenApi;

use crate::inbound::handlers::ErrorResponse;

// Stand-ins carrying the path documentation; the real handlers are generic.

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "ok", "service": "payment-gateway-simulator"}))
    )
)]
async fn health() {}

/// Process a new payment
#[utoipa::path(
    post,
    path = "/api/pay",
    tag = "payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment processed", body = PaymentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Payment id already used", body = ErrorResponse),
        (status = 500, description = "Transaction could not be logged", body = ErrorResponse)
    )
)]
async fn create_payment() {}

/// Latest recorded state of a payment
#[utoipa::path(
    get,
    path = "/api/pay/{id}",
    tag = "payments",
    params(
        ("id" = String, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment details", body = PaymentResponse),
        (status = 404, description = "Payment not found", body = ErrorResponse)
    )
)]
async fn get_payment() {}

/// Refund a payment, fully or partially
#[utoipa::path(
    post,
    path = "/api/pay/{id}/refund",
    tag = "payments",
    params(
        ("id" = String, Path, description = "Payment ID")
    ),
    request_body = RefundRequest,
    responses(
        (status = 200, description = "Payment refunded", body = PaymentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Payment unknown or refund rejected", body = ErrorResponse)
    )
)]
async fn refund_payment() {}

/// Every logged record of a payment, oldest first
#[utoipa::path(
    get,
    path = "/api/pay/{id}/transactions",
    tag = "payments",
    params(
        ("id" = String, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment history", body = Vec<PaymentResponse>)
    )
)]
async fn list_transactions() {}

/// OpenAPI documentation for the payment gateway API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Gateway Simulator API",
        version = "1.0.0",
        description = "Simulated payment gateway. Payments are processed in memory and every transaction is logged as JSON to stdout.",
        license(name = "MIT"),
    ),
    paths(
        health,
        create_payment,
        get_payment,
        refund_payment,
        list_transactions,
    ),
    components(
        schemas(
            CreatePaymentRequest,
            RefundRequest,
            PaymentResponse,
            PaymentStatus,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment processing and refunds"),
    )
)]
pub struct ApiDoc;
