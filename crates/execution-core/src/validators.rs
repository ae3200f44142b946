//! Input validators for user-supplied order fields.
//!
//! Each returns the normalized value or a [`ValidationError`]. The order
//! client trusts their output and does not re-check it.

use crate::error::ValidationError;
use crate::order::{OrderSide, OrderType};
use rust_decimal::Decimal;

/// Parse a side, case-insensitively.
pub fn validate_side(side: &str) -> Result<OrderSide, ValidationError> {
    OrderSide::from_binance_str(&side.trim().to_uppercase())
        .ok_or_else(|| ValidationError::InvalidSide(side.to_string()))
}

/// Parse an order type, case-insensitively.
pub fn validate_order_type(order_type: &str) -> Result<OrderType, ValidationError> {
    OrderType::from_binance_str(&order_type.trim().to_uppercase())
        .ok_or_else(|| ValidationError::InvalidOrderType(order_type.to_string()))
}

/// Quantity must be strictly positive.
pub fn validate_quantity(quantity: Decimal) -> Result<Decimal, ValidationError> {
    if quantity > Decimal::ZERO {
        Ok(quantity.normalize())
    } else {
        Err(ValidationError::NonPositiveQuantity(quantity))
    }
}

/// Price must be present and strictly positive.
pub fn validate_price(price: Option<Decimal>) -> Result<Decimal, ValidationError> {
    match price {
        None => Err(ValidationError::MissingPrice),
        Some(p) if p > Decimal::ZERO => Ok(p.normalize()),
        Some(p) => Err(ValidationError::NonPositivePrice(p)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_side() {
        assert_eq!(validate_side("buy").unwrap(), OrderSide::Buy);
        assert_eq!(validate_side(" SELL ").unwrap(), OrderSide::Sell);
        assert_eq!(
            validate_side("hold").unwrap_err(),
            ValidationError::InvalidSide("hold".into())
        );
    }

    #[test]
    fn test_validate_order_type() {
        assert_eq!(validate_order_type("market").unwrap(), OrderType::Market);
        assert_eq!(validate_order_type("Limit").unwrap(), OrderType::Limit);
        assert_eq!(
            validate_order_type("STOP_MARKET").unwrap_err(),
            ValidationError::InvalidOrderType("STOP_MARKET".into())
        );
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(dec!(0.010)).unwrap().to_string(), "0.01");
        assert!(validate_quantity(dec!(0)).is_err());
        assert!(validate_quantity(dec!(-1)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price(Some(dec!(3000.00))).unwrap().to_string(), "3000");
        assert_eq!(validate_price(None).unwrap_err(), ValidationError::MissingPrice);
        assert_eq!(
            validate_price(Some(dec!(0))).unwrap_err(),
            ValidationError::NonPositivePrice(dec!(0))
        );
    }
}
