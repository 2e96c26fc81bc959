//! Test scenarios over [`PaymentApiPort`].
//!
//! Tests go through these types rather than the adapter, so the transport
//! can change without touching them.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{ClientError, CreatePaymentRequest, PaymentApiPort, PaymentResponse};

/// Creates a payment through the API.
pub struct CreatePaymentUseCase<A> {
    api: Arc<A>,
}

impl<A: PaymentApiPort> CreatePaymentUseCase<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn execute(
        &self,
        payment_id: &str,
        amount: Decimal,
        currency: &str,
        description: Option<&str>,
        customer_email: Option<&str>,
    ) -> Result<PaymentResponse, ClientError> {
        let request = CreatePaymentRequest {
            payment_id: payment_id.to_string(),
            amount,
            currency: currency.to_string(),
            description: description.map(String::from),
            customer_email: customer_email.map(String::from),
            metadata: None,
        };
        self.api.create_payment(&request).await
    }
}

/// Fetches a payment by id through the API.
pub struct GetPaymentUseCase<A> {
    api: Arc<A>,
}

impl<A: PaymentApiPort> GetPaymentUseCase<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, payment_id: &str) -> Result<PaymentResponse, ClientError> {
        self.api.get_payment(payment_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{PaymentStatus, RefundRequest};

    /// Port double backed by a list of created payments.
    #[derive(Default)]
    struct FakeApi {
        created: Mutex<Vec<PaymentResponse>>,
    }

    #[async_trait]
    impl PaymentApiPort for FakeApi {
        async fn create_payment(
            &self,
            request: &CreatePaymentRequest,
        ) -> Result<PaymentResponse, ClientError> {
            let response = PaymentResponse {
                payment_id: request.payment_id.clone(),
                amount: request.amount,
                currency: request.currency.to_uppercase(),
                status: PaymentStatus::Succeeded,
                description: request.description.clone(),
                customer_email: request.customer_email.clone(),
                error_message: None,
                created_at: "2026-01-01T00:00:00+00:00".into(),
            };
            self.created.lock().unwrap().push(response.clone());
            Ok(response)
        }

        async fn get_payment(&self, payment_id: &str) -> Result<PaymentResponse, ClientError> {
            self.created
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.payment_id == payment_id)
                .cloned()
                .ok_or_else(|| ClientError::NotFound(format!("Payment {payment_id} not found")))
        }

        async fn refund_payment(
            &self,
            payment_id: &str,
            _request: &RefundRequest,
        ) -> Result<PaymentResponse, ClientError> {
            self.get_payment(payment_id).await
        }

        async fn payment_history(
            &self,
            payment_id: &str,
        ) -> Result<Vec<PaymentResponse>, ClientError> {
            Ok(self.get_payment(payment_id).await.into_iter().collect())
        }
    }

    #[tokio::test]
    async fn test_create_then_get_goes_through_port() {
        let api = Arc::new(FakeApi::default());
        let create = CreatePaymentUseCase::new(api.clone());
        let get = GetPaymentUseCase::new(api.clone());

        let created = create
            .execute("pay_uc", dec!(12.50), "usd", Some("Lunch"), None)
            .await
            .unwrap();
        assert_eq!(created.currency, "USD");
        assert_eq!(created.description.as_deref(), Some("Lunch"));

        let fetched = get.execute("pay_uc").await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(api.created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_payment_is_not_found() {
        let get = GetPaymentUseCase::new(Arc::new(FakeApi::default()));

        let err = get.execute("pay_missing").await.unwrap_err();

        assert!(matches!(err, ClientError::NotFound(_)));
        assert!(err.to_string().contains("pay_missing"));
    }
}
