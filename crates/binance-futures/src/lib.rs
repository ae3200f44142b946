//! Binance USDⓈ-M futures REST client.
//!
//! This crate provides a typed client for placing futures orders with:
//!
//! - **Time synchronization**: every signed call is stamped with a freshly
//!   fetched server time
//! - **Request signing**: HMAC-SHA256 over the exact query string sent
//! - **Order composition**: minimal parameter sets for market and GTC limit orders
//! - **Error handling**: typed errors with a [`ErrorKind`] for branching
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ApiCredentials;
//! use binance_futures::{FuturesClientConfig, FuturesRestClient, OrderComposer};
//! use execution_core::OrderSide;
//! use rust_decimal_macros::dec;
//!
//! let credentials = ApiCredentials::from_env()?;
//! let client = FuturesRestClient::new(credentials, FuturesClientConfig::from_env()?)?;
//! let composer = OrderComposer::new(client);
//!
//! let result = composer
//!     .place_limit_order("ETHUSDT", OrderSide::Sell, dec!(1), dec!(3000))
//!     .await?;
//! ```

mod client;
pub mod config;
mod error;
mod orders;
mod responses;

pub use client::FuturesRestClient;
pub use config::FuturesClientConfig;
pub use error::{ErrorKind, FuturesError};
pub use orders::{order_params, OrderComposer, SignedTransport};
pub use responses::{ApiErrorResponse, OrderResult, ServerTimeResponse};
