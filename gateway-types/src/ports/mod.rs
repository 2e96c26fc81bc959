//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! Use cases depend on these traits, not on concrete implementations.

mod logger;
mod processor;

pub use logger::TransactionLoggerPort;
pub use processor::{Metadata, PaymentProcessorPort};
