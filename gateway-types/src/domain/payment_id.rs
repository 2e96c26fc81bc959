//! Payment identifier value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum identifier length, counted in characters.
pub const MAX_PAYMENT_ID_LEN: usize = 100;

/// Unique identifier for a Payment.
///
/// Holds the caller's string exactly as given (no trimming), once it has
/// been checked to be non-blank and at most [`MAX_PAYMENT_ID_LEN`] long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaymentId(String);

impl PaymentId {
    /// Creates a validated PaymentId.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::validation(
                "payment_id",
                "PaymentId must be a non-empty string",
            ));
        }

        if value.chars().count() > MAX_PAYMENT_ID_LEN {
            return Err(DomainError::validation(
                "payment_id",
                format!("PaymentId cannot be longer than {MAX_PAYMENT_ID_LEN} characters"),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the identifier string.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PaymentId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PaymentId> for String {
    fn from(id: PaymentId) -> Self {
        id.0
    }
}

impl std::str::FromStr for PaymentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
