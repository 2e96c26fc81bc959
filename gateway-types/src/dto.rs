//! Data Transfer Objects (DTOs) for use-case inputs and the HTTP boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Payment, PaymentStatus};
use crate::error::DomainError;
use crate::ports::Metadata;

/// Longest description accepted over HTTP, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

// ─────────────────────────────────────────────────────────────────────────────
// Use-case inputs
// ─────────────────────────────────────────────────────────────────────────────

/// Raw input for processing a payment. Validated by the use case.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessPaymentInput {
    pub payment_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub description: Option<String>,
    pub customer_email: Option<String>,
    pub metadata: Option<Metadata>,
}

impl ProcessPaymentInput {
    /// Creates an input with only the required fields set.
    pub fn new(payment_id: impl Into<String>, amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            payment_id: payment_id.into(),
            amount,
            currency: currency.into(),
            description: None,
            customer_email: None,
            metadata: None,
        }
    }
}

/// Raw input for refunding a payment.
#[derive(Debug, Clone, PartialEq)]
pub struct RefundPaymentInput {
    pub payment_id: String,
    /// Partial refund amount; `None` refunds in full
    pub amount: Option<Decimal>,
    /// Required when `amount` is set
    pub currency: Option<String>,
    pub reason: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// HTTP DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a payment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentRequest {
    /// Caller-chosen unique payment identifier (1-100 characters)
    #[schema(example = "pay_1a2b3c4d5e6f")]
    pub payment_id: String,
    /// Amount as a JSON number or decimal string; rounded to 2 places
    #[schema(value_type = String, example = "100.50")]
    pub amount: Decimal,
    /// ISO 4217 currency code
    #[schema(example = "USD")]
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Order #42")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "customer@example.com")]
    pub customer_email: Option<String>,
    /// Extra data forwarded to the gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Metadata>,
}

impl CreatePaymentRequest {
    /// Checks the request-level constraints that the core does not own.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(DomainError::validation(
                    "description",
                    format!("description cannot be longer than {MAX_DESCRIPTION_LEN} characters"),
                ));
            }
        }

        if let Some(email) = &self.customer_email {
            if !looks_like_email(email) {
                return Err(DomainError::validation(
                    "customer_email",
                    "customer_email must be a valid email address",
                ));
            }
        }

        Ok(())
    }
}

impl From<CreatePaymentRequest> for ProcessPaymentInput {
    fn from(req: CreatePaymentRequest) -> Self {
        Self {
            payment_id: req.payment_id,
            amount: req.amount,
            currency: req.currency,
            description: req.description,
            customer_email: req.customer_email,
            metadata: req.metadata,
        }
    }
}

/// `local@domain.tld`: a single '@' and a dot inside the domain.
fn looks_like_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain
            .match_indices('.')
            .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Request to refund a payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RefundRequest {
    /// Partial refund amount; omit to refund in full
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "30.00")]
    pub amount: Option<Decimal>,
    /// Currency of the partial amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "USD")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Customer request")]
    pub reason: Option<String>,
}

impl RefundRequest {
    pub fn into_input(self, payment_id: impl Into<String>) -> RefundPaymentInput {
        RefundPaymentInput {
            payment_id: payment_id.into(),
            amount: self.amount,
            currency: self.currency,
            reason: self.reason,
        }
    }
}

/// Payment as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    #[schema(example = "pay_1a2b3c4d5e6f")]
    pub payment_id: String,
    /// Decimal string with two places
    #[schema(value_type = String, example = "100.50")]
    pub amount: Decimal,
    #[schema(example = "USD")]
    pub currency: String,
    pub status: PaymentStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Creation time (RFC 3339)
    #[schema(example = "2026-02-04T12:00:00+00:00")]
    pub created_at: String,
}

impl From<&Payment> for PaymentResponse {
    fn from(payment: &Payment) -> Self {
        Self {
            payment_id: payment.id().value().to_string(),
            amount: payment.amount().value(),
            currency: payment.amount().currency().to_string(),
            status: payment.status(),
            description: payment.description().map(String::from),
            customer_email: payment.customer_email().map(String::from),
            error_message: payment.error_message().map(String::from),
            created_at: payment.created_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, PaymentId};
    use rust_decimal_macros::dec;

    fn request() -> CreatePaymentRequest {
        CreatePaymentRequest {
            payment_id: "pay_1".into(),
            amount: dec!(10),
            currency: "USD".into(),
            description: None,
            customer_email: None,
            metadata: None,
        }
    }

    #[test]
    fn test_amount_accepts_number_or_string() {
        let from_number: CreatePaymentRequest =
            serde_json::from_str(r#"{"payment_id":"p","amount":100.5,"currency":"USD"}"#).unwrap();
        let from_string: CreatePaymentRequest =
            serde_json::from_str(r#"{"payment_id":"p","amount":"100.50","currency":"USD"}"#)
                .unwrap();

        assert_eq!(from_number.amount, dec!(100.5));
        assert_eq!(from_string.amount, dec!(100.50));
        assert!(from_number.description.is_none());
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("test@example.com"));
        assert!(looks_like_email("a.b@mail.example.org"));
        assert!(!looks_like_email("missing-at.example.com"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("two@@example.com"));
        assert!(!looks_like_email("user@localhost"));
        assert!(!looks_like_email("user@.com"));
        assert!(!looks_like_email("user@example."));
    }

    #[test]
    fn test_validate_rejects_bad_email_and_long_description() {
        let mut req = request();
        req.customer_email = Some("not-an-email".into());
        assert_eq!(req.validate().unwrap_err().field(), Some("customer_email"));

        let mut req = request();
        req.description = Some("d".repeat(MAX_DESCRIPTION_LEN + 1));
        assert_eq!(req.validate().unwrap_err().field(), Some("description"));

        let mut req = request();
        req.description = Some("d".repeat(MAX_DESCRIPTION_LEN));
        req.customer_email = Some("test@example.com".into());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_payment_response_from_payment() {
        let payment = Payment::succeeded(
            PaymentId::new("pay_9").unwrap(),
            Amount::new(dec!(42.99), "eur").unwrap(),
            Some("JSON test".into()),
            None,
        );

        let resp = PaymentResponse::from(&payment);
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["payment_id"], "pay_9");
        assert_eq!(json["amount"], "42.99");
        assert_eq!(json["currency"], "EUR");
        assert_eq!(json["status"], "succeeded");
        assert_eq!(json["description"], "JSON test");
        assert!(json["customer_email"].is_null());
        assert!(json.get("error_message").is_none());
    }
}
