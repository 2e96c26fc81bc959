//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the payment use cases.

pub mod handlers;
mod server;

pub use server::HttpServer;
