//! In-memory adapter tests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use gateway_types::{
        Amount, ErrorKind, PaymentId, PaymentProcessorPort, PaymentStatus, TransactionLoggerPort,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{ConsoleTransactionLogger, InMemoryPaymentProcessor, RecordingTransactionLogger};

    fn id(value: &str) -> PaymentId {
        PaymentId::new(value).unwrap()
    }

    fn amount(value: Decimal, currency: &str) -> Amount {
        Amount::new(value, currency).unwrap()
    }

    fn quiet_recorder() -> RecordingTransactionLogger<ConsoleTransactionLogger> {
        RecordingTransactionLogger::new(ConsoleTransactionLogger::with_writer(
            false,
            std::io::sink(),
        ))
    }

    #[tokio::test]
    async fn test_process_payment_success() {
        let processor = InMemoryPaymentProcessor::new();

        let payment = processor
            .process_payment(
                id("pay_123"),
                amount(dec!(100.00), "USD"),
                Some("Test payment".into()),
                Some("test@example.com".into()),
                None,
            )
            .await
            .unwrap();

        assert_eq!(payment.id().value(), "pay_123");
        assert_eq!(payment.amount().value(), dec!(100.00));
        assert_eq!(payment.status(), PaymentStatus::Succeeded);
        assert_eq!(payment.description(), Some("Test payment"));
        assert_eq!(payment.customer_email(), Some("test@example.com"));
        assert_eq!(processor.get(&id("pay_123")), Some(payment));
    }

    #[tokio::test]
    async fn test_duplicate_payment_id_is_rejected() {
        let processor = InMemoryPaymentProcessor::new();
        processor
            .process_payment(id("pay_dup"), amount(dec!(50), "EUR"), None, None, None)
            .await
            .unwrap();

        let err = processor
            .process_payment(id("pay_dup"), amount(dec!(75), "EUR"), None, None, None)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Processing);
        assert_eq!(err.payment_id(), Some("pay_dup"));
        assert!(err.to_string().contains("already exists"));

        // the first record is kept
        let stored = processor.get(&id("pay_dup")).unwrap();
        assert_eq!(stored.amount().value(), dec!(50.00));
        assert_eq!(processor.len(), 1);
    }

    #[tokio::test]
    async fn test_metadata_is_accepted() {
        let processor = InMemoryPaymentProcessor::new();
        let mut metadata = gateway_types::Metadata::new();
        metadata.insert("order".into(), serde_json::json!(42));

        let payment = processor
            .process_payment(id("pay_meta"), amount(dec!(5), "USD"), None, None, Some(metadata))
            .await
            .unwrap();

        assert!(payment.is_successful());
    }

    #[tokio::test]
    async fn test_full_refund() {
        let processor = InMemoryPaymentProcessor::new();
        processor
            .process_payment(
                id("pay_refund"),
                amount(dec!(200.00), "GBP"),
                None,
                Some("c@example.com".into()),
                None,
            )
            .await
            .unwrap();

        let refunded = processor
            .refund_payment(&id("pay_refund"), None, Some("Customer request".into()))
            .await
            .unwrap();

        assert_eq!(refunded.id().value(), "pay_refund");
        assert_eq!(refunded.amount().value(), dec!(200.00));
        assert_eq!(refunded.status(), PaymentStatus::Refunded);
        assert!(refunded.description().unwrap().to_lowercase().contains("refund"));
        assert_eq!(refunded.customer_email(), Some("c@example.com"));

        // the refund replaced the stored record
        assert_eq!(processor.get(&id("pay_refund")), Some(refunded));
    }

    #[tokio::test]
    async fn test_partial_refund() {
        let processor = InMemoryPaymentProcessor::new();
        processor
            .process_payment(id("pay_partial"), amount(dec!(100), "USD"), None, None, None)
            .await
            .unwrap();

        let refunded = processor
            .refund_payment(
                &id("pay_partial"),
                Some(amount(dec!(30.00), "USD")),
                Some("Partial refund".into()),
            )
            .await
            .unwrap();

        assert_eq!(refunded.amount().value(), dec!(30.00));
        assert_eq!(refunded.status(), PaymentStatus::Refunded);
    }

    #[tokio::test]
    async fn test_find_payment_tracks_the_stored_record() {
        let processor = InMemoryPaymentProcessor::new();
        assert_eq!(processor.find_payment(&id("pay_find")).await.unwrap(), None);

        let created = processor
            .process_payment(id("pay_find"), amount(dec!(60), "USD"), None, None, None)
            .await
            .unwrap();
        assert_eq!(
            processor.find_payment(&id("pay_find")).await.unwrap(),
            Some(created)
        );

        let refunded = processor
            .refund_payment(&id("pay_find"), None, None)
            .await
            .unwrap();
        assert_eq!(
            processor.find_payment(&id("pay_find")).await.unwrap(),
            Some(refunded)
        );
    }

    #[tokio::test]
    async fn test_refund_of_unknown_payment_fails() {
        let processor = InMemoryPaymentProcessor::new();

        let err = processor
            .refund_payment(&id("non_existent_payment"), None, None)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Processing);
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_over_refund_and_currency_mismatch_are_rejected() {
        let processor = InMemoryPaymentProcessor::new();
        processor
            .process_payment(id("pay_over"), amount(dec!(10), "USD"), None, None, None)
            .await
            .unwrap();

        let err = processor
            .refund_payment(&id("pay_over"), Some(amount(dec!(10.01), "USD")), None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("exceeds"));

        let err = processor
            .refund_payment(&id("pay_over"), Some(amount(dec!(5), "EUR")), None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("does not match"));

        // rejected refunds leave the record alone
        let stored = processor.get(&id("pay_over")).unwrap();
        assert_eq!(stored.status(), PaymentStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_instances_are_isolated() {
        let first = InMemoryPaymentProcessor::new();
        let second = InMemoryPaymentProcessor::new();

        first
            .process_payment(id("pay_isolated"), amount(dec!(10), "USD"), None, None, None)
            .await
            .unwrap();

        let err = second
            .refund_payment(&id("pay_isolated"), None, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(second.is_empty());

        // and the id is still free on the second instance
        assert!(
            second
                .process_payment(id("pay_isolated"), amount(dec!(10), "USD"), None, None, None)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_concurrent_duplicates_yield_one_success() {
        let processor = Arc::new(InMemoryPaymentProcessor::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let processor = processor.clone();
                tokio::spawn(async move {
                    processor
                        .process_payment(id("pay_race"), amount(dec!(1), "USD"), None, None, None)
                        .await
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
    }

    #[tokio::test]
    async fn test_recording_logger_keeps_history_in_order() {
        let processor = InMemoryPaymentProcessor::new();
        let logger = quiet_recorder();
        assert!(!logger.inner().is_pretty());

        let created = processor
            .process_payment(id("pay_hist"), amount(dec!(80), "USD"), None, None, None)
            .await
            .unwrap();
        logger.log_transaction(&created).await.unwrap();

        let refunded = processor
            .refund_payment(&id("pay_hist"), Some(amount(dec!(20), "USD")), None)
            .await
            .unwrap();
        logger.log_transaction(&refunded).await.unwrap();

        let history = logger
            .get_transactions_by_payment_id(&id("pay_hist"))
            .await
            .unwrap();

        assert_eq!(history, vec![created, refunded]);
        assert!(
            logger
                .get_transactions_by_payment_id(&id("pay_other"))
                .await
                .unwrap()
                .is_empty()
        );
    }
}
