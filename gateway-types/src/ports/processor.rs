//! Payment processor port.
//!
//! The gateway side of the hexagon: in-memory simulators and real
//! gateway clients implement this trait.

use crate::domain::{Amount, Payment, PaymentId};
use crate::error::DomainError;

/// Free-form key/value data forwarded to the gateway with a payment.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Processes and refunds payments.
///
/// Every implementation must report the same conflicts:
/// - `process_payment` fails with [`DomainError::Processing`] when the id
///   was already processed (message contains "already exists").
/// - `refund_payment` fails with [`DomainError::Processing`] when the id is
///   unknown (message contains "not found").
#[async_trait::async_trait]
pub trait PaymentProcessorPort: Send + Sync + 'static {
    /// Charges a new payment and records it.
    async fn process_payment(
        &self,
        payment_id: PaymentId,
        amount: Amount,
        description: Option<String>,
        customer_email: Option<String>,
        metadata: Option<Metadata>,
    ) -> Result<Payment, DomainError>;

    /// Refunds a recorded payment, in full when `amount` is `None`.
    ///
    /// The refund record replaces the stored payment.
    async fn refund_payment(
        &self,
        payment_id: &PaymentId,
        amount: Option<Amount>,
        reason: Option<String>,
    ) -> Result<Payment, DomainError>;

    /// Returns the stored record for `payment_id`, if any.
    async fn find_payment(&self, payment_id: &PaymentId) -> Result<Option<Payment>, DomainError>;
}
