//! Payment aggregate.

use chrono::{DateTime, Utc};
use std::fmt;

use super::amount::Amount;
use super::payment_id::PaymentId;
use super::status::PaymentStatus;

/// Description used for refunds that were not given a reason.
pub const DEFAULT_REFUND_REASON: &str = "No reason provided";

/// A payment record.
///
/// Payments are immutable snapshots: a status change (such as a refund)
/// produces a new `Payment` rather than modifying this one.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    id: PaymentId,
    amount: Amount,
    status: PaymentStatus,
    created_at: DateTime<Utc>,
    description: Option<String>,
    customer_email: Option<String>,
    error_message: Option<String>,
}

impl Payment {
    /// Creates a payment with no optional details, stamped now.
    pub fn new(id: PaymentId, amount: Amount, status: PaymentStatus) -> Self {
        Self::from_parts(id, amount, status, Utc::now(), None, None, None)
    }

    /// Creates a successfully processed payment.
    pub fn succeeded(
        id: PaymentId,
        amount: Amount,
        description: Option<String>,
        customer_email: Option<String>,
    ) -> Self {
        Self::from_parts(
            id,
            amount,
            PaymentStatus::Succeeded,
            Utc::now(),
            description,
            customer_email,
            None,
        )
    }

    /// Creates a payment the gateway declined.
    pub fn failed(id: PaymentId, amount: Amount, error_message: impl Into<String>) -> Self {
        Self::from_parts(
            id,
            amount,
            PaymentStatus::Failed,
            Utc::now(),
            None,
            None,
            Some(error_message.into()),
        )
    }

    /// Reconstructs a payment from all of its fields.
    pub fn from_parts(
        id: PaymentId,
        amount: Amount,
        status: PaymentStatus,
        created_at: DateTime<Utc>,
        description: Option<String>,
        customer_email: Option<String>,
        error_message: Option<String>,
    ) -> Self {
        Self {
            id,
            amount,
            status,
            created_at,
            description,
            customer_email,
            error_message,
        }
    }

    /// Builds the record that supersedes this payment after a refund.
    ///
    /// `amount` is the partial refund amount; `None` refunds in full.
    pub fn refunded(&self, amount: Option<Amount>, reason: Option<&str>) -> Payment {
        Payment {
            id: self.id.clone(),
            amount: amount.unwrap_or_else(|| self.amount.clone()),
            status: PaymentStatus::Refunded,
            created_at: Utc::now(),
            description: Some(format!(
                "Refund: {}",
                reason.unwrap_or(DEFAULT_REFUND_REASON)
            )),
            customer_email: self.customer_email.clone(),
            error_message: None,
        }
    }

    pub fn id(&self) -> &PaymentId {
        &self.id
    }

    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn customer_email(&self) -> Option<&str> {
        self.customer_email.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_successful(&self) -> bool {
        self.status == PaymentStatus::Succeeded
    }

    pub fn is_failed(&self) -> bool {
        self.status == PaymentStatus::Failed
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment(id={}, amount={}, status={})",
            self.id, self.amount, self.status
        )
    }
}
