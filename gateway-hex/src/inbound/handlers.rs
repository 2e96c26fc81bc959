//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use gateway_types::{
    AppError, CreatePaymentRequest, DomainError, PaymentId, PaymentProcessorPort, PaymentResponse,
    RefundRequest, TransactionLoggerPort,
};

use crate::PaymentService;
use crate::openapi::ApiDoc;

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "payment-gateway-simulator";

/// Application state shared across handlers.
pub struct AppState<P, L> {
    pub service: PaymentService<P, L>,
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    #[schema(example = "Validation error: amount must be positive")]
    pub error: String,
    /// HTTP status code
    #[schema(example = 400)]
    pub code: u16,
    /// Rejected input field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Payment involved, for processing conflicts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

/// Error type for handlers.
#[derive(Debug)]
pub enum ApiError {
    App(AppError),
    /// Request body could not be read
    BadRequest(String),
    NotFound(String),
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError::App(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::App(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, field, payment_id) = match self {
            ApiError::App(AppError::Domain(DomainError::Validation { field, message })) => (
                StatusCode::BAD_REQUEST,
                format!("Validation error: {}", message),
                Some(field.to_string()),
                None,
            ),
            ApiError::App(AppError::Domain(DomainError::Processing {
                payment_id,
                message,
            })) => (StatusCode::CONFLICT, message, None, Some(payment_id)),
            ApiError::App(err @ AppError::Logging(_)) => {
                tracing::error!(error = %err, "Payment processing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Payment processing failed: {}", err),
                    None,
                    None,
                )
            }
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Validation error: {}", msg),
                None,
                None,
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None, None),
        };

        let body = ErrorResponse {
            error,
            code: status.as_u16(),
            field,
            payment_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "service": SERVICE_NAME }))
}

/// OpenAPI document for the API.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Create and process a payment.
#[tracing::instrument(skip(state, payload), fields(payment_id = tracing::field::Empty))]
pub async fn create_payment<P, L>(
    State(state): State<Arc<AppState<P, L>>>,
    payload: Result<Json<CreatePaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    P: PaymentProcessorPort,
    L: TransactionLoggerPort,
{
    let Json(req) = payload?;
    tracing::Span::current().record("payment_id", req.payment_id.as_str());
    req.validate()?;

    let payment = state.service.process_payment(req.into()).await?;
    Ok((StatusCode::CREATED, Json(PaymentResponse::from(&payment))))
}

/// Get the latest state of a payment.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn get_payment<P, L>(
    State(state): State<Arc<AppState<P, L>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    P: PaymentProcessorPort,
    L: TransactionLoggerPort,
{
    let payment_id = PaymentId::new(id)?;

    let payment = state
        .service
        .latest_payment(&payment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Payment {} not found", payment_id)))?;

    Ok(Json(PaymentResponse::from(&payment)))
}

/// Refund a payment, fully or partially.
#[tracing::instrument(skip(state, payload), fields(payment_id = %id))]
pub async fn refund_payment<P, L>(
    State(state): State<Arc<AppState<P, L>>>,
    Path(id): Path<String>,
    payload: Result<Json<RefundRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    P: PaymentProcessorPort,
    L: TransactionLoggerPort,
{
    let Json(req) = payload?;

    let refund = state.service.refund_payment(req.into_input(id)).await?;
    Ok(Json(PaymentResponse::from(&refund)))
}

/// List every logged record of a payment, oldest first.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn list_transactions<P, L>(
    State(state): State<Arc<AppState<P, L>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    P: PaymentProcessorPort,
    L: TransactionLoggerPort,
{
    let payment_id = PaymentId::new(id)?;

    let history = state.service.payment_history(&payment_id).await?;
    let response: Vec<PaymentResponse> = history.iter().map(PaymentResponse::from).collect();

    Ok(Json(response))
}
