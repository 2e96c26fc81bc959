//! Transaction logger port.

use crate::domain::{Payment, PaymentId};
use crate::error::LogError;

/// Records completed payments.
///
/// Logging is observational: it never changes the outcome of processing.
#[async_trait::async_trait]
pub trait TransactionLoggerPort: Send + Sync + 'static {
    /// Records a payment. Only infrastructure failures are reported.
    async fn log_transaction(&self, payment: &Payment) -> Result<(), LogError>;

    /// Returns every record logged for `payment_id`, oldest first.
    ///
    /// Implementations without storage return an empty list.
    async fn get_transactions_by_payment_id(
        &self,
        payment_id: &PaymentId,
    ) -> Result<Vec<Payment>, LogError>;
}
