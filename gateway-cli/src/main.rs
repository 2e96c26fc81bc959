//! Gateway CLI
//!
//! Command-line interface for the payment gateway simulator.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use gateway_client::{CreatePaymentRequest, PaymentApiPort, RefundRequest, RestPaymentAdapter};

#[derive(Parser)]
#[command(name = "gateway")]
#[command(author, version, about = "Payment gateway simulator CLI client", long_about = None)]
struct Cli {
    /// Base URL of the simulator
    #[arg(
        long,
        env = "GATEWAY_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API health
    Health,
    /// Process a new payment
    Pay {
        /// Amount, e.g. 100.50
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        /// ISO 4217 currency code
        #[arg(long, default_value = "USD")]
        currency: String,
        /// Payment ID; generated when omitted
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Show the latest state of a payment
    Get {
        /// Payment ID
        id: String,
    },
    /// Refund a payment, in full unless an amount is given
    Refund {
        /// Payment ID
        id: String,
        #[arg(long, requires = "currency")]
        amount: Option<Decimal>,
        #[arg(long, requires = "amount")]
        currency: Option<String>,
        #[arg(long)]
        reason: Option<String>,
    },
    /// List every logged record of a payment
    History {
        /// Payment ID
        id: String,
    },
}

/// `pay_` followed by 12 hex characters.
fn generate_payment_id() -> String {
    let hex = uuid::Uuid::new_v4().simple().to_string();
    format!("pay_{}", &hex[..12])
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = RestPaymentAdapter::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Pay {
            amount,
            currency,
            id,
            description,
            email,
        } => {
            let request = CreatePaymentRequest {
                payment_id: id.unwrap_or_else(generate_payment_id),
                amount,
                currency,
                description,
                customer_email: email,
                metadata: None,
            };
            let payment = client.create_payment(&request).await?;
            println!("{}", serde_json::to_string_pretty(&payment)?);
        }

        Commands::Get { id } => {
            let payment = client.get_payment(&id).await?;
            println!("{}", serde_json::to_string_pretty(&payment)?);
        }

        Commands::Refund {
            id,
            amount,
            currency,
            reason,
        } => {
            let request = RefundRequest {
                amount,
                currency,
                reason,
            };
            let refund = client.refund_payment(&id, &request).await?;
            println!("{}", serde_json::to_string_pretty(&refund)?);
        }

        Commands::History { id } => {
            let history = client.payment_history(&id).await?;
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
    }

    Ok(())
}
