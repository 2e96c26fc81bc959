//! In-memory payment processor.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use gateway_types::{Amount, DomainError, Metadata, Payment, PaymentId, PaymentProcessorPort};

/// Simulated gateway that keeps payments in process memory.
///
/// Every payment succeeds. Nothing survives a restart, and each instance
/// owns its own store.
#[derive(Debug, Default)]
pub struct InMemoryPaymentProcessor {
    payments: DashMap<String, Payment>,
}

impl InMemoryPaymentProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored record for `payment_id`.
    pub fn get(&self, payment_id: &PaymentId) -> Option<Payment> {
        self.payments
            .get(payment_id.value())
            .map(|entry| entry.value().clone())
    }

    /// Number of stored payments.
    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

#[async_trait]
impl PaymentProcessorPort for InMemoryPaymentProcessor {
    async fn process_payment(
        &self,
        payment_id: PaymentId,
        amount: Amount,
        description: Option<String>,
        customer_email: Option<String>,
        metadata: Option<Metadata>,
    ) -> Result<Payment, DomainError> {
        if let Some(metadata) = &metadata {
            let keys: Vec<&str> = metadata.keys().map(String::as_str).collect();
            tracing::debug!(payment_id = %payment_id, ?keys, "Gateway metadata received");
        }

        // The entry lock makes check-and-insert atomic per id.
        match self.payments.entry(payment_id.value().to_string()) {
            Entry::Occupied(_) => Err(DomainError::processing(
                payment_id.value(),
                format!("Payment with id={} already exists", payment_id),
            )),
            Entry::Vacant(slot) => {
                let payment = Payment::succeeded(payment_id, amount, description, customer_email);
                slot.insert(payment.clone());
                tracing::debug!(payment = %payment, "Payment stored");
                Ok(payment)
            }
        }
    }

    async fn refund_payment(
        &self,
        payment_id: &PaymentId,
        amount: Option<Amount>,
        reason: Option<String>,
    ) -> Result<Payment, DomainError> {
        let mut stored = self.payments.get_mut(payment_id.value()).ok_or_else(|| {
            DomainError::processing(
                payment_id.value(),
                format!("Payment with id={} not found for refund", payment_id),
            )
        })?;

        if let Some(requested) = &amount {
            let current = stored.amount();
            if requested.currency() != current.currency() {
                return Err(DomainError::processing(
                    payment_id.value(),
                    format!(
                        "Refund currency {} does not match payment currency {}",
                        requested.currency(),
                        current.currency()
                    ),
                ));
            }
            if requested.value() > current.value() {
                return Err(DomainError::processing(
                    payment_id.value(),
                    format!(
                        "Refund amount {} exceeds payment amount {}",
                        requested, current
                    ),
                ));
            }
        }

        let refunded = stored.refunded(amount, reason.as_deref());
        *stored = refunded.clone();
        tracing::debug!(payment = %refunded, "Payment refunded");

        Ok(refunded)
    }

    async fn find_payment(&self, payment_id: &PaymentId) -> Result<Option<Payment>, DomainError> {
        Ok(self.get(payment_id))
    }
}
