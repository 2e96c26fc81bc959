//! Console transaction logger.

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;

use gateway_types::{LogError, Payment, PaymentId, PaymentStatus, TransactionLoggerPort};

/// One transaction log line.
#[derive(Debug, Serialize)]
struct LogEntry<'a> {
    timestamp: String,
    payment_id: &'a str,
    amount: String,
    currency: &'a str,
    status: PaymentStatus,
    description: Option<&'a str>,
    customer_email: Option<&'a str>,
    error_message: Option<&'a str>,
}

impl<'a> LogEntry<'a> {
    fn new(payment: &'a Payment) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            payment_id: payment.id().value(),
            amount: payment.amount().value().to_string(),
            currency: payment.amount().currency(),
            status: payment.status(),
            description: payment.description(),
            customer_email: payment.customer_email(),
            error_message: payment.error_message(),
        }
    }
}

/// Writes each logged payment as a JSON object.
///
/// Compact mode emits one line per payment; pretty mode emits indented,
/// multi-line JSON. Keeps no history.
pub struct ConsoleTransactionLogger {
    pretty: bool,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleTransactionLogger {
    /// Creates a logger that writes to stdout.
    pub fn new(pretty: bool) -> Self {
        Self::with_writer(pretty, std::io::stdout())
    }

    /// Creates a logger that writes to `writer`.
    pub fn with_writer(pretty: bool, writer: impl Write + Send + 'static) -> Self {
        Self {
            pretty,
            out: Mutex::new(Box::new(writer)),
        }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    fn format(&self, payment: &Payment) -> Result<String, LogError> {
        let entry = LogEntry::new(payment);
        let text = if self.pretty {
            serde_json::to_string_pretty(&entry)?
        } else {
            serde_json::to_string(&entry)?
        };
        Ok(text)
    }
}

impl std::fmt::Debug for ConsoleTransactionLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleTransactionLogger")
            .field("pretty", &self.pretty)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TransactionLoggerPort for ConsoleTransactionLogger {
    async fn log_transaction(&self, payment: &Payment) -> Result<(), LogError> {
        let text = self.format(payment)?;

        let mut out = self.out.lock().map_err(|_| LogError::WriterPoisoned)?;
        writeln!(out, "{text}")?;
        out.flush()?;
        Ok(())
    }

    async fn get_transactions_by_payment_id(
        &self,
        _payment_id: &PaymentId,
    ) -> Result<Vec<Payment>, LogError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_types::Amount;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    /// Writer that keeps everything in a shared buffer.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn payment() -> Payment {
        Payment::succeeded(
            PaymentId::new("pay_json_test").unwrap(),
            Amount::new(dec!(42.99), "EUR").unwrap(),
            Some("JSON test".into()),
            Some("test@example.com".into()),
        )
    }

    #[tokio::test]
    async fn test_compact_output_is_one_json_line() {
        let buf = SharedBuf::default();
        let logger = ConsoleTransactionLogger::with_writer(false, buf.clone());

        logger.log_transaction(&payment()).await.unwrap();

        let output = buf.contents();
        assert_eq!(output.lines().count(), 1);

        let entry: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(entry["payment_id"], "pay_json_test");
        assert_eq!(entry["amount"], "42.99");
        assert_eq!(entry["currency"], "EUR");
        assert_eq!(entry["status"], "succeeded");
        assert_eq!(entry["description"], "JSON test");
        assert_eq!(entry["customer_email"], "test@example.com");
        assert!(entry["error_message"].is_null());
        assert!(entry["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_pretty_output_is_indented() {
        let buf = SharedBuf::default();
        let logger = ConsoleTransactionLogger::with_writer(true, buf.clone());
        assert!(logger.is_pretty());
        let failed = Payment::failed(
            PaymentId::new("pay_pretty").unwrap(),
            Amount::new(dec!(1), "USD").unwrap(),
            "Card declined",
        );

        logger.log_transaction(&failed).await.unwrap();

        let output = buf.contents();
        assert!(output.lines().count() > 1);
        assert!(output.contains("\n  \"payment_id\": \"pay_pretty\""));

        let entry: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(entry["status"], "failed");
        assert_eq!(entry["error_message"], "Card declined");
        assert_eq!(entry["amount"], "1.00");
    }

    #[tokio::test]
    async fn test_history_is_always_empty() {
        let logger = ConsoleTransactionLogger::with_writer(false, std::io::sink());
        logger.log_transaction(&payment()).await.unwrap();

        let history = logger
            .get_transactions_by_payment_id(payment().id())
            .await
            .unwrap();
        assert!(history.is_empty());
    }
}
