//! Client example demonstrating a full payment flow against an in-process server.
//!
//! Run with: cargo run -p gateway-app --example client_example

use std::net::SocketAddr;
use std::sync::Arc;

use gateway_adapters::{
    ConsoleTransactionLogger, InMemoryPaymentProcessor, RecordingTransactionLogger,
};
use gateway_client::{
    CreatePaymentUseCase, GetPaymentUseCase, PaymentApiPort, RefundRequest, RestPaymentAdapter,
};
use gateway_hex::{PaymentService, inbound::HttpServer};
use rust_decimal_macros::dec;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Any free port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    println!("🚀 Starting server on {addr}...");

    // Start server in background; transactions are printed as pretty JSON
    let logger = RecordingTransactionLogger::new(ConsoleTransactionLogger::new(true));
    let service = PaymentService::new(InMemoryPaymentProcessor::new(), logger);
    let server = HttpServer::new(service);
    tokio::spawn(async move {
        if let Err(e) = server.serve(listener).await {
            eprintln!("server stopped: {e}");
        }
    });

    // Create client
    let api = Arc::new(RestPaymentAdapter::new(format!("http://{addr}")));

    // Health check
    let health = api.health().await?;
    println!("✅ Server health: {health}");

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: Full payment flow
    // ─────────────────────────────────────────────────────────────────────────

    let create = CreatePaymentUseCase::new(api.clone());
    let get = GetPaymentUseCase::new(api.clone());

    let payment = create
        .execute(
            "pay_demo_001",
            dec!(100.50),
            "usd",
            Some("Demo order"),
            Some("alice@example.com"),
        )
        .await?;
    println!(
        "✅ Created payment {} for {} {} ({})",
        payment.payment_id, payment.amount, payment.currency, payment.status
    );

    // Same id again is a conflict
    let duplicate = create
        .execute("pay_demo_001", dec!(1), "USD", None, None)
        .await;
    println!("✅ Duplicate rejected: {}", duplicate.unwrap_err());

    // Invalid input never reaches the processor
    let invalid = create
        .execute("pay_demo_002", dec!(-5), "USD", None, None)
        .await;
    println!("✅ Invalid amount rejected: {}", invalid.unwrap_err());

    // Partial refund
    let refund = api
        .refund_payment(
            "pay_demo_001",
            &RefundRequest {
                amount: Some(dec!(30)),
                currency: Some("USD".into()),
                reason: Some("Damaged item".into()),
            },
        )
        .await?;
    println!(
        "✅ Refunded {} {} ({})",
        refund.amount, refund.currency, refund.status
    );

    let latest = get.execute("pay_demo_001").await?;
    println!("   Latest status: {}", latest.status);

    // Full history
    let history = api.payment_history("pay_demo_001").await?;
    println!("\n📋 History of pay_demo_001:");
    for entry in history {
        println!(
            "   - {} {} {} at {}",
            entry.status, entry.amount, entry.currency, entry.created_at
        );
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
