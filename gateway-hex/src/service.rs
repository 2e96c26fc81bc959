//! Payment Application Service
//!
//! Facade over the use cases, payment lookups and the transaction history.
//! Contains NO infrastructure logic - pure business orchestration.

use std::sync::Arc;

use gateway_types::{
    AppError, Payment, PaymentId, PaymentProcessorPort, ProcessPaymentInput, RefundPaymentInput,
    TransactionLoggerPort,
};

use crate::use_cases::{ProcessPaymentUseCase, RefundPaymentUseCase, UseCase};

/// Application service for payment operations.
///
/// Generic over the two ports - adapters are injected at compile time.
/// Both use cases share the same processor and logger instances.
pub struct PaymentService<P, L> {
    process: ProcessPaymentUseCase<P, L>,
    refund: RefundPaymentUseCase<P, L>,
    processor: Arc<P>,
    logger: Arc<L>,
}

impl<P, L> PaymentService<P, L>
where
    P: PaymentProcessorPort,
    L: TransactionLoggerPort,
{
    /// Creates a new payment service from its adapters.
    pub fn new(processor: P, logger: L) -> Self {
        Self::from_shared(Arc::new(processor), Arc::new(logger))
    }

    /// Creates a service over adapters that are also used elsewhere.
    pub fn from_shared(processor: Arc<P>, logger: Arc<L>) -> Self {
        Self {
            process: ProcessPaymentUseCase::new(processor.clone(), logger.clone()),
            refund: RefundPaymentUseCase::new(processor.clone(), logger.clone()),
            processor,
            logger,
        }
    }

    /// Processes a new payment.
    pub async fn process_payment(&self, input: ProcessPaymentInput) -> Result<Payment, AppError> {
        self.process.execute(input).await
    }

    /// Refunds a processed payment.
    pub async fn refund_payment(&self, input: RefundPaymentInput) -> Result<Payment, AppError> {
        self.refund.execute(input).await
    }

    /// Lists everything logged for a payment, oldest first.
    pub async fn payment_history(&self, payment_id: &PaymentId) -> Result<Vec<Payment>, AppError> {
        Ok(self
            .logger
            .get_transactions_by_payment_id(payment_id)
            .await?)
    }

    /// Returns the current state of a payment as stored by the processor.
    ///
    /// Independent of the logger: a payment whose log write failed is still
    /// found here, though it is missing from [`Self::payment_history`].
    pub async fn latest_payment(&self, payment_id: &PaymentId) -> Result<Option<Payment>, AppError> {
        Ok(self.processor.find_payment(payment_id).await?)
    }
}
