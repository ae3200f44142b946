//! Binance futures API response types.

use rest_client::TransportError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Response from GET /fapi/v1/time.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTimeResponse {
    #[serde(rename = "serverTime")]
    pub server_time: i64,
}

/// Error payload returned with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorResponse {
    pub code: i64,
    pub msg: String,
}

impl ApiErrorResponse {
    /// Parse an error body, if it has the `{"code", "msg"}` shape.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

/// Result of a successful order placement.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderResult {
    pub order_id: i64,
    pub status: String,
    pub executed_qty: Decimal,
    pub avg_price: Decimal,
    /// Full response body as returned by the exchange.
    pub raw: serde_json::Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderFields {
    order_id: i64,
    status: String,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    executed_qty: Decimal,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    avg_price: Decimal,
}

impl OrderResult {
    /// Decode a POST /fapi/v1/order body. Unknown fields are kept in `raw`.
    pub fn from_body(body: &str) -> Result<Self, TransportError> {
        let invalid = |e: serde_json::Error| TransportError::InvalidResponse {
            reason: e.to_string(),
            body: body.to_string(),
        };

        let raw: serde_json::Value = serde_json::from_str(body).map_err(invalid)?;
        let fields = OrderFields::deserialize(&raw).map_err(invalid)?;

        Ok(Self {
            order_id: fields.order_id,
            status: fields.status,
            executed_qty: fields.executed_qty,
            avg_price: fields.avg_price,
            raw,
        })
    }
}

/// Deserialize a Decimal sent as a JSON string or number. `null` reads as zero.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    let text = match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Str(s)) => s,
        Some(Raw::Num(n)) => n.to_string(),
        None => return Ok(Decimal::ZERO),
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(serde::de::Error::custom)
}
