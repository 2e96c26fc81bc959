//! Domain models for the payment gateway.

pub mod amount;
pub mod payment;
pub mod payment_id;
pub mod status;

pub use amount::{AMOUNT_SCALE, Amount, is_currency_code};
pub use payment::{DEFAULT_REFUND_REASON, Payment};
pub use payment_id::{MAX_PAYMENT_ID_LEN, PaymentId};
pub use status::PaymentStatus;
