//! Transaction logger that remembers what it logged.

use async_trait::async_trait;
use dashmap::DashMap;

use gateway_types::{LogError, Payment, PaymentId, TransactionLoggerPort};

/// Wraps another logger and keeps a per-payment history.
///
/// Entries are forwarded to the inner logger first; a record is only added
/// to the history once the inner logger accepted it.
#[derive(Debug)]
pub struct RecordingTransactionLogger<L> {
    inner: L,
    history: DashMap<String, Vec<Payment>>,
}

impl<L: TransactionLoggerPort> RecordingTransactionLogger<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            history: DashMap::new(),
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

#[async_trait]
impl<L: TransactionLoggerPort> TransactionLoggerPort for RecordingTransactionLogger<L> {
    async fn log_transaction(&self, payment: &Payment) -> Result<(), LogError> {
        self.inner.log_transaction(payment).await?;

        self.history
            .entry(payment.id().value().to_string())
            .or_default()
            .push(payment.clone());
        Ok(())
    }

    async fn get_transactions_by_payment_id(
        &self,
        payment_id: &PaymentId,
    ) -> Result<Vec<Payment>, LogError> {
        Ok(self
            .history
            .get(payment_id.value())
            .map(|records| records.value().clone())
            .unwrap_or_default())
    }
}
