//! # Gateway Types
//!
//! Domain types and port traits for the payment gateway simulator.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Value objects and the Payment aggregate
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Use-case inputs and HTTP boundary objects
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Amount, Payment, PaymentId, PaymentStatus};
pub use dto::*;
pub use error::{AppError, DomainError, ErrorKind, LogError};
pub use ports::{Metadata, PaymentProcessorPort, TransactionLoggerPort};
