//! # Gateway Adapters
//!
//! Concrete port implementations (adapters) for the payment gateway simulator:
//!
//! - [`InMemoryPaymentProcessor`] implements `PaymentProcessorPort`
//! - [`ConsoleTransactionLogger`] implements `TransactionLoggerPort` (stdout JSON)
//! - [`RecordingTransactionLogger`] wraps any logger and adds history lookup
//!
//! Adapters are picked at the composition root; nothing here is global.

pub mod console;
pub mod in_memory;
pub mod recording;

#[cfg(test)]
mod in_memory_tests;

pub use console::ConsoleTransactionLogger;
pub use in_memory::InMemoryPaymentProcessor;
pub use recording::RecordingTransactionLogger;
