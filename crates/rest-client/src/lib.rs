//! Generic REST client infrastructure.
//!
//! This crate provides a thin wrapper around `reqwest` with:
//!
//! - Consistent error handling via `TransportError`
//! - Ordered query-string encoding shared with the request signer
//! - Per-request timeout and a pooled, shareable client
//! - Request/response events delivered to an injected `HttpEventSink`
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::{RestClient, DEFAULT_TIMEOUT};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct TimeResponse {
//!     #[serde(rename = "serverTime")]
//!     server_time: i64,
//! }
//!
//! let client = RestClient::new("https://fapi.binance.com", DEFAULT_TIMEOUT)?;
//! let time: TimeResponse = client.get("/fapi/v1/time", None, &[]).await?;
//! ```

mod client;
mod error;
mod sink;

pub use client::{parse_json, RestClient, DEFAULT_TIMEOUT};
pub use error::TransportError;
pub use reqwest::Method;
pub use sink::{FailureEvent, HttpEventSink, RequestEvent, ResponseEvent, TracingSink};
