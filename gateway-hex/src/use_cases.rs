//! Use cases.
//!
//! Each use case implements one business operation by calling ports.
//! Use cases know nothing about concrete adapters.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use gateway_types::domain::is_currency_code;
use gateway_types::{
    Amount, AppError, DomainError, Payment, PaymentId, PaymentProcessorPort, ProcessPaymentInput,
    RefundPaymentInput, TransactionLoggerPort,
};

/// A single business operation.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send + 'static;
    type Output;

    /// Runs the operation.
    async fn execute(&self, input: Self::Input) -> Result<Self::Output, AppError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Process Payment
// ─────────────────────────────────────────────────────────────────────────────

/// Validates a payment request, charges it and logs the result.
pub struct ProcessPaymentUseCase<P, L> {
    processor: Arc<P>,
    logger: Arc<L>,
}

impl<P, L> ProcessPaymentUseCase<P, L>
where
    P: PaymentProcessorPort,
    L: TransactionLoggerPort,
{
    pub fn new(processor: Arc<P>, logger: Arc<L>) -> Self {
        Self { processor, logger }
    }

    fn validate(input: &ProcessPaymentInput) -> Result<(), DomainError> {
        if input.payment_id.trim().is_empty() {
            return Err(DomainError::validation(
                "payment_id",
                "payment_id must be non-empty",
            ));
        }

        if input.amount <= Decimal::ZERO {
            return Err(DomainError::validation("amount", "amount must be positive"));
        }

        if !is_currency_code(&input.currency) {
            return Err(DomainError::validation(
                "currency",
                "currency must be a 3-letter ISO code",
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl<P, L> UseCase for ProcessPaymentUseCase<P, L>
where
    P: PaymentProcessorPort,
    L: TransactionLoggerPort,
{
    type Input = ProcessPaymentInput;
    type Output = Payment;

    #[tracing::instrument(skip(self, input), fields(payment_id = %input.payment_id))]
    async fn execute(&self, input: ProcessPaymentInput) -> Result<Payment, AppError> {
        Self::validate(&input)?;

        let payment_id = PaymentId::new(input.payment_id)?;
        let amount = Amount::new(input.amount, &input.currency)?;

        let payment = self
            .processor
            .process_payment(
                payment_id,
                amount,
                input.description,
                input.customer_email,
                input.metadata,
            )
            .await?;

        self.logger.log_transaction(&payment).await?;

        tracing::info!(payment = %payment, "Payment processed");
        Ok(payment)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Refund Payment
// ─────────────────────────────────────────────────────────────────────────────

/// Refunds a processed payment, fully or partially, and logs the refund.
pub struct RefundPaymentUseCase<P, L> {
    processor: Arc<P>,
    logger: Arc<L>,
}

impl<P, L> RefundPaymentUseCase<P, L>
where
    P: PaymentProcessorPort,
    L: TransactionLoggerPort,
{
    pub fn new(processor: Arc<P>, logger: Arc<L>) -> Self {
        Self { processor, logger }
    }

    fn partial_amount(input: &RefundPaymentInput) -> Result<Option<Amount>, DomainError> {
        match (input.amount, input.currency.as_deref()) {
            (None, None) => Ok(None),
            (Some(value), Some(currency)) => {
                if value <= Decimal::ZERO {
                    return Err(DomainError::validation("amount", "amount must be positive"));
                }
                if !is_currency_code(currency) {
                    return Err(DomainError::validation(
                        "currency",
                        "currency must be a 3-letter ISO code",
                    ));
                }
                Amount::new(value, currency).map(Some)
            }
            (Some(_), None) => Err(DomainError::validation(
                "currency",
                "currency is required for a partial refund",
            )),
            (None, Some(_)) => Err(DomainError::validation(
                "amount",
                "amount is required when currency is given",
            )),
        }
    }
}

#[async_trait]
impl<P, L> UseCase for RefundPaymentUseCase<P, L>
where
    P: PaymentProcessorPort,
    L: TransactionLoggerPort,
{
    type Input = RefundPaymentInput;
    type Output = Payment;

    #[tracing::instrument(skip(self, input), fields(payment_id = %input.payment_id))]
    async fn execute(&self, input: RefundPaymentInput) -> Result<Payment, AppError> {
        if input.payment_id.trim().is_empty() {
            return Err(
                DomainError::validation("payment_id", "payment_id must be non-empty").into(),
            );
        }

        let amount = Self::partial_amount(&input)?;
        let payment_id = PaymentId::new(input.payment_id)?;

        let refund = self
            .processor
            .refund_payment(&payment_id, amount, input.reason)
            .await?;

        self.logger.log_transaction(&refund).await?;

        tracing::info!(payment = %refund, "Payment refunded");
        Ok(refund)
    }
}
