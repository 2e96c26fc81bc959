//! # Gateway Client
//!
//! A typed Rust client for the payment gateway simulator, laid out as its
//! own small hexagon: tests drive the [`use_cases`], the use cases talk to
//! [`PaymentApiPort`], and [`RestPaymentAdapter`] speaks HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

pub use gateway_types::{CreatePaymentRequest, PaymentResponse, PaymentStatus, RefundRequest};

pub mod use_cases;

pub use use_cases::{CreatePaymentUseCase, GetPaymentUseCase};

/// Per-request timeout of the REST adapter.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the request (400)
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// What the tests need from the simulator, independent of transport.
#[async_trait]
pub trait PaymentApiPort: Send + Sync {
    async fn create_payment(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<PaymentResponse, ClientError>;

    async fn get_payment(&self, payment_id: &str) -> Result<PaymentResponse, ClientError>;

    async fn refund_payment(
        &self,
        payment_id: &str,
        request: &RefundRequest,
    ) -> Result<PaymentResponse, ClientError>;

    async fn payment_history(&self, payment_id: &str)
    -> Result<Vec<PaymentResponse>, ClientError>;
}

/// [`PaymentApiPort`] over the simulator's REST API.
pub struct RestPaymentAdapter {
    base_url: String,
    http: Client,
}

impl RestPaymentAdapter {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(self.url(&["health"])?)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Joins `segments` onto the base URL, percent-encoding each one.
    ///
    /// A payment id such as `order/42` or `inv#7` stays a single segment.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(self.url(segments)?)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(self.url(segments)?)
            .timeout(REQUEST_TIMEOUT)
            .json(body)
            .send()
            .await?;
        handle_response(resp).await
    }
}

#[async_trait]
impl PaymentApiPort for RestPaymentAdapter {
    async fn create_payment(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<PaymentResponse, ClientError> {
        self.post(&["api", "pay"], request).await
    }

    async fn get_payment(&self, payment_id: &str) -> Result<PaymentResponse, ClientError> {
        self.get(&["api", "pay", payment_id]).await
    }

    async fn refund_payment(
        &self,
        payment_id: &str,
        request: &RefundRequest,
    ) -> Result<PaymentResponse, ClientError> {
        self.post(&["api", "pay", payment_id, "refund"], request)
            .await
    }

    async fn payment_history(
        &self,
        payment_id: &str,
    ) -> Result<Vec<PaymentResponse>, ClientError> {
        self.get(&["api", "pay", payment_id, "transactions"])
            .await
    }
}

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    } else {
        let body = resp.text().await.unwrap_or_default();
        Err(error_for_status(status, body))
    }
}

/// Maps a failed response onto [`ClientError`], preferring the server's `error` field.
fn error_for_status(status: StatusCode, body: String) -> ClientError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(body);

    match status {
        StatusCode::BAD_REQUEST => ClientError::Validation(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        _ => ClientError::Api {
            status: status.as_u16(),
            message,
        },
    }
}
