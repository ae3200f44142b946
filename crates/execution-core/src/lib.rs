//! Core order types and input validation.
//!
//! - **Order types**: `OrderSide`, `OrderType`, `TimeInForce`
//! - **Intent**: `OrderIntent`, a validated order request where a limit price
//!   is present exactly for `LIMIT` orders
//! - **Validators**: pure functions normalizing raw CLI input

mod error;
mod order;
pub mod validators;

pub use error::ValidationError;
pub use order::{OrderIntent, OrderSide, OrderType, TimeInForce};
pub use validators::{validate_order_type, validate_price, validate_quantity, validate_side};
