use rust_decimal::Decimal;
use thiserror::Error;

/// Rejected order input. Raised before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid side '{0}', expected BUY or SELL")]
    InvalidSide(String),

    #[error("Invalid order type '{0}', expected MARKET or LIMIT")]
    InvalidOrderType(String),

    #[error("Quantity must be greater than zero, got {0}")]
    NonPositiveQuantity(Decimal),

    #[error("Price must be greater than zero, got {0}")]
    NonPositivePrice(Decimal),

    #[error("Price is required for LIMIT orders")]
    MissingPrice,

    #[error("Price {0} is not allowed for MARKET orders")]
    UnexpectedPrice(Decimal),

    #[error("Symbol must not be empty")]
    EmptySymbol,
}
