//! Order placement.

use crate::config::ORDER_PATH;
use crate::error::FuturesError;
use crate::responses::OrderResult;
use async_trait::async_trait;
use auth::RequestParams;
use execution_core::{OrderIntent, OrderSide, OrderType, TimeInForce};
use rest_client::{Method, TransportError};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Sends a parameter set as a signed request.
///
/// Implementors append `timestamp`, `recvWindow` and `signature`; callers
/// only provide their own fields.
#[async_trait]
pub trait SignedTransport: Send + Sync {
    async fn send_signed(
        &self,
        method: Method,
        path: &str,
        params: RequestParams,
    ) -> Result<OrderResult, TransportError>;
}

#[async_trait]
impl<T: SignedTransport + ?Sized> SignedTransport for Arc<T> {
    async fn send_signed(
        &self,
        method: Method,
        path: &str,
        params: RequestParams,
    ) -> Result<OrderResult, TransportError> {
        (**self).send_signed(method, path, params).await
    }
}

/// Turns order intents into `POST /fapi/v1/order` calls.
///
/// One attempt per call. Retrying is left to the caller.
#[derive(Debug, Clone)]
pub struct OrderComposer<T> {
    transport: T,
}

impl<T: SignedTransport> OrderComposer<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Place a market order. Sends no `price` and no `timeInForce`.
    pub async fn place_market_order(
        &self,
        symbol: &str,
        side: OrderSide,
        quantity: Decimal,
    ) -> Result<OrderResult, FuturesError> {
        let intent = OrderIntent::market(symbol, side, quantity)?;
        self.place_order(&intent).await
    }

    /// Place a GTC limit order.
    pub async fn place_limit_order(
        &self,
        symbol: &str,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<OrderResult, FuturesError> {
        let intent = OrderIntent::limit(symbol, side, quantity, price)?;
        self.place_order(&intent).await
    }

    /// Build the intent from loose fields, then place it.
    ///
    /// A `LIMIT` without price fails here with a validation error and the
    /// transport is never called.
    pub async fn place(
        &self,
        symbol: &str,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
        price: Option<Decimal>,
    ) -> Result<OrderResult, FuturesError> {
        let intent = OrderIntent::new(symbol, side, order_type, quantity, price)?;
        self.place_order(&intent).await
    }

    pub async fn place_order(&self, intent: &OrderIntent) -> Result<OrderResult, FuturesError> {
        let params = order_params(intent);

        tracing::info!(
            symbol = %intent.symbol(),
            side = ?intent.side(),
            order_type = ?intent.order_type(),
            quantity = %intent.quantity(),
            price = ?intent.price(),
            "Placing order"
        );

        let result = self
            .transport
            .send_signed(Method::POST, ORDER_PATH, params)
            .await?;

        tracing::info!(
            order_id = result.order_id,
            status = %result.status,
            executed_qty = %result.executed_qty,
            avg_price = %result.avg_price,
            "Order placed"
        );

        Ok(result)
    }
}

/// Minimal parameter set for an intent, before stamping and signing.
pub fn order_params(intent: &OrderIntent) -> RequestParams {
    let mut params = RequestParams::new();
    params
        .push("symbol", intent.symbol())
        .push("side", intent.side().as_binance_str())
        .push("type", intent.order_type().as_binance_str())
        .push("quantity", intent.quantity());

    if let Some(price) = intent.price() {
        params
            .push("price", price)
            .push("timeInForce", TimeInForce::GTC.as_binance_str());
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use execution_core::ValidationError;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    /// Records every call and answers with a canned result.
    #[derive(Default)]
    struct MockTransport {
        calls: Mutex<Vec<(Method, String, RequestParams)>>,
        reject_with: Option<TransportError>,
    }

    impl MockTransport {
        fn calls(&self) -> Vec<(Method, String, RequestParams)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SignedTransport for MockTransport {
        async fn send_signed(
            &self,
            method: Method,
            path: &str,
            params: RequestParams,
        ) -> Result<OrderResult, TransportError> {
            self.calls
                .lock()
                .unwrap()
                .push((method, path.to_string(), params));

            if let Some(err) = &self.reject_with {
                return Err(err.clone());
            }
            OrderResult::from_body(
                r#"{"orderId":123,"status":"NEW","executedQty":"0","avgPrice":"0.00"}"#,
            )
        }
    }

    #[tokio::test]
    async fn test_market_order_params() {
        let composer = OrderComposer::new(MockTransport::default());

        composer
            .place_market_order("BTCUSDT", OrderSide::Buy, dec!(0.01))
            .await
            .unwrap();

        let calls = composer.transport().calls();
        assert_eq!(calls.len(), 1);
        let (method, path, params) = &calls[0];
        assert_eq!(*method, Method::POST);
        assert_eq!(path, "/fapi/v1/order");
        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["symbol", "side", "type", "quantity"]
        );
        assert_eq!(params.get("type"), Some("MARKET"));
        assert_eq!(params.get("quantity"), Some("0.01"));
        assert!(!params.contains("price"));
        assert!(!params.contains("timeInForce"));
    }

    #[tokio::test]
    async fn test_limit_order_params() {
        let composer = OrderComposer::new(MockTransport::default());

        composer
            .place_limit_order("ETHUSDT", OrderSide::Sell, dec!(1), dec!(3000))
            .await
            .unwrap();

        let calls = composer.transport().calls();
        let (_, _, params) = &calls[0];
        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["symbol", "side", "type", "quantity", "price", "timeInForce"]
        );
        assert_eq!(params.get("side"), Some("SELL"));
        assert_eq!(params.get("type"), Some("LIMIT"));
        assert_eq!(params.get("price"), Some("3000"));
        assert_eq!(params.get("timeInForce"), Some("GTC"));
    }

    #[tokio::test]
    async fn test_limit_without_price_never_reaches_transport() {
        let composer = OrderComposer::new(MockTransport::default());

        let err = composer
            .place("ETHUSDT", OrderSide::Sell, OrderType::Limit, dec!(1), None)
            .await
            .unwrap_err();

        assert_eq!(err, FuturesError::Validation(ValidationError::MissingPrice));
        assert!(composer.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_is_surfaced_once() {
        let rejection = TransportError::ExchangeRejected {
            status: 400,
            body: r#"{"code":-1121,"msg":"Invalid symbol."}"#.into(),
        };
        let composer = OrderComposer::new(MockTransport {
            reject_with: Some(rejection.clone()),
            ..Default::default()
        });

        let err = composer
            .place_market_order("NOPE", OrderSide::Buy, dec!(1))
            .await
            .unwrap_err();

        assert_eq!(err, FuturesError::Transport(rejection));
        assert_eq!(composer.transport().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_composer_over_shared_transport() {
        let transport = Arc::new(MockTransport::default());
        let composer = OrderComposer::new(Arc::clone(&transport));

        composer
            .place_market_order("BTCUSDT", OrderSide::Buy, dec!(0.5))
            .await
            .unwrap();

        assert_eq!(transport.calls().len(), 1);
    }
}
