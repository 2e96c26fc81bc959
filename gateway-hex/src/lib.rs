//! # Gateway Hex
//!
//! Use cases, application service and HTTP adapter for the payment
//! gateway simulator.
//!
//! ## Architecture
//!
//! - `use_cases` - One type per business operation, driving the ports
//! - `service` - Facade composing the use cases
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! Everything is generic over `P: PaymentProcessorPort` and
//! `L: TransactionLoggerPort`; adapters are chosen by the binary.

pub mod inbound;
mod openapi;
pub mod service;
pub mod use_cases;


pub use openapi::ApiDoc;
pub use service::PaymentService;
pub use use_cases::{ProcessPaymentUseCase, RefundPaymentUseCase, UseCase};
