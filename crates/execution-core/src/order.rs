//! Order types and the validated order intent.

use crate::error::ValidationError;
use rust_decimal::Decimal;

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Convert from Binance string representation.
    pub fn from_binance_str(s: &str) -> Option<Self> {
        match s {
            "BUY" => Some(Self::Buy),
            "SELL" => Some(Self::Sell),
            _ => None,
        }
    }

    /// Convert to Binance string representation.
    pub fn as_binance_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

/// Order type. Only the two types this client places are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    Market,
    Limit,
}

impl OrderType {
    /// Convert from Binance string representation.
    pub fn from_binance_str(s: &str) -> Option<Self> {
        match s {
            "MARKET" => Some(Self::Market),
            "LIMIT" => Some(Self::Limit),
            _ => None,
        }
    }

    /// Convert to Binance string representation.
    pub fn as_binance_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
        }
    }

    /// Whether orders of this type carry a limit price.
    pub fn requires_price(&self) -> bool {
        matches!(self, Self::Limit)
    }
}

/// Time in force for limit orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInForce {
    /// Good Till Canceled - remains active until filled or canceled.
    GTC,
}

impl TimeInForce {
    /// Convert to Binance string representation.
    pub fn as_binance_str(&self) -> &'static str {
        match self {
            Self::GTC => "GTC",
        }
    }
}

/// Validated trading intent for a single order.
///
/// A `LIMIT` intent always carries a price; a `MARKET` intent never does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderIntent {
    symbol: String,
    side: OrderSide,
    order_type: OrderType,
    quantity: Decimal,
    price: Option<Decimal>,
}

impl OrderIntent {
    /// Build an intent, enforcing the price/type co-presence rule.
    ///
    /// # Errors
    /// Returns `ValidationError` for an empty symbol, a non-positive quantity
    /// or price, a `LIMIT` without price, or a `MARKET` with one.
    pub fn new(
        symbol: impl Into<String>,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
        price: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        let symbol = symbol.into().trim().to_uppercase();
        if symbol.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        if quantity <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveQuantity(quantity));
        }

        match (order_type, price) {
            (OrderType::Limit, None) => return Err(ValidationError::MissingPrice),
            (OrderType::Market, Some(p)) => return Err(ValidationError::UnexpectedPrice(p)),
            (_, Some(p)) if p <= Decimal::ZERO => {
                return Err(ValidationError::NonPositivePrice(p))
            }
            _ => {}
        }

        Ok(Self {
            symbol,
            side,
            order_type,
            quantity,
            price,
        })
    }

    /// Market order intent.
    pub fn market(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
    ) -> Result<Self, ValidationError> {
        Self::new(symbol, side, OrderType::Market, quantity, None)
    }

    /// Limit order intent.
    pub fn limit(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Self, ValidationError> {
        Self::new(symbol, side, OrderType::Limit, quantity, Some(price))
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Limit price; `Some` exactly when the type is `LIMIT`.
    pub fn price(&self) -> Option<Decimal> {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_side_conversion() {
        assert_eq!(OrderSide::from_binance_str("BUY"), Some(OrderSide::Buy));
        assert_eq!(OrderSide::from_binance_str("SELL"), Some(OrderSide::Sell));
        assert_eq!(OrderSide::from_binance_str("INVALID"), None);

        assert_eq!(OrderSide::Buy.as_binance_str(), "BUY");
        assert_eq!(OrderSide::Sell.as_binance_str(), "SELL");
    }

    #[test]
    fn test_order_type_conversion() {
        assert_eq!(OrderType::from_binance_str("LIMIT"), Some(OrderType::Limit));
        assert_eq!(OrderType::from_binance_str("STOP"), None);
        assert!(OrderType::Limit.requires_price());
        assert!(!OrderType::Market.requires_price());
    }

    #[test]
    fn test_limit_intent_requires_price() {
        let err = OrderIntent::new("ETHUSDT", OrderSide::Sell, OrderType::Limit, dec!(1), None)
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingPrice);
    }

    #[test]
    fn test_market_intent_rejects_price() {
        let err = OrderIntent::new(
            "BTCUSDT",
            OrderSide::Buy,
            OrderType::Market,
            dec!(0.01),
            Some(dec!(65000)),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::UnexpectedPrice(dec!(65000)));
    }

    #[test]
    fn test_intent_rejects_non_positive_values() {
        assert_eq!(
            OrderIntent::market("BTCUSDT", OrderSide::Buy, dec!(0)).unwrap_err(),
            ValidationError::NonPositiveQuantity(dec!(0))
        );
        assert_eq!(
            OrderIntent::limit("BTCUSDT", OrderSide::Buy, dec!(1), dec!(-5)).unwrap_err(),
            ValidationError::NonPositivePrice(dec!(-5))
        );
        assert_eq!(
            OrderIntent::market("  ", OrderSide::Buy, dec!(1)).unwrap_err(),
            ValidationError::EmptySymbol
        );
    }

    #[test]
    fn test_intent_normalizes_symbol() {
        let intent = OrderIntent::limit(" ethusdt ", OrderSide::Sell, dec!(1), dec!(3000)).unwrap();
        assert_eq!(intent.symbol(), "ETHUSDT");
        assert_eq!(intent.order_type(), OrderType::Limit);
        assert_eq!(intent.price(), Some(dec!(3000)));
    }
}
