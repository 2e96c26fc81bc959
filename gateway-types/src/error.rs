//! Error types for the payment gateway.

/// Discriminator for [`DomainError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Processing,
}

/// Domain-level errors (business rule violations).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Malformed or out-of-range input. Raised before any state changes.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Conflict reported by a payment processor (duplicate or unknown id).
    #[error("{message}")]
    Processing { payment_id: String, message: String },
}

impl DomainError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn processing(payment_id: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::Processing {
            payment_id: payment_id.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } => ErrorKind::Validation,
            DomainError::Processing { .. } => ErrorKind::Processing,
        }
    }

    /// Name of the rejected input field, for validation errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::Validation { field, .. } => Some(field),
            DomainError::Processing { .. } => None,
        }
    }

    /// Identifier of the payment involved, for processing errors.
    pub fn payment_id(&self) -> Option<&str> {
        match self {
            DomainError::Validation { .. } => None,
            DomainError::Processing { payment_id, .. } => Some(payment_id),
        }
    }
}

/// Transaction log failures (infrastructure, not business rules).
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to write transaction log: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode transaction log entry: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Transaction log writer is unavailable")]
    WriterPoisoned,
}

/// Application-level errors returned by use cases.
///
/// Wraps whatever a port raised without translating it.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Logging(#[from] LogError),
}

impl AppError {
    /// Returns the domain error, if this is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(err) => Some(err),
            AppError::Logging(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_accessors() {
        let err = DomainError::validation("amount", "amount must be positive");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.field(), Some("amount"));
        assert_eq!(err.payment_id(), None);
        assert_eq!(err.to_string(), "amount must be positive");
    }

    #[test]
    fn test_processing_error_carries_payment_id() {
        let err = DomainError::processing("pay_1", "Payment with id=pay_1 already exists");
        assert_eq!(err.kind(), ErrorKind::Processing);
        assert_eq!(err.payment_id(), Some("pay_1"));
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_app_error_is_transparent() {
        let err: AppError = DomainError::validation("currency", "bad currency").into();
        assert_eq!(err.to_string(), "bad currency");
        assert!(err.as_domain().is_some());
    }
}
