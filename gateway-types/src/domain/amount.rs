//! Monetary amount value object.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use crate::error::DomainError;

/// Number of decimal places every amount is carried at.
pub const AMOUNT_SCALE: u32 = 2;

/// Returns true if `code` looks like an ISO 4217 code (three ASCII letters).
///
/// Case is not checked here; [`Amount::new`] upper-cases the code.
pub fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// A positive monetary value with its currency.
///
/// The value is exact (no floating point) and always has two decimal
/// places; construction rounds half to even, so `99.999` becomes `100.00`
/// and `2.345` becomes `2.34`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Amount {
    value: Decimal,
    currency: String,
}

impl Amount {
    /// Creates a validated, normalized Amount.
    pub fn new(value: Decimal, currency: &str) -> Result<Self, DomainError> {
        if value <= Decimal::ZERO {
            return Err(DomainError::validation("amount", "Amount must be positive"));
        }

        if !is_currency_code(currency) {
            return Err(DomainError::validation(
                "currency",
                "Currency must be a 3-letter ISO code (e.g., USD, EUR, RUB)",
            ));
        }

        let mut rounded =
            value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(AMOUNT_SCALE);

        // e.g. 0.001 rounds down to 0.00
        if rounded <= Decimal::ZERO {
            return Err(DomainError::validation("amount", "Amount must be positive"));
        }

        Ok(Self {
            value: rounded,
            currency: currency.to_ascii_uppercase(),
        })
    }

    /// Returns the rounded value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the upper-case currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}
