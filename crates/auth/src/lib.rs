//! Authentication and signing for the Binance futures API.
//!
//! This crate provides secure credential management and request signing
//! for authenticated API calls.
//!
//! # Features
//!
//! - **Secure Credentials**: API secrets are wrapped in `SecretString` to prevent
//!   accidental logging and ensure memory is zeroed on drop.
//! - **Ordered Parameters**: `RequestParams` encodes in insertion order, so the
//!   signed string and the sent query string are byte-identical.
//! - **HMAC-SHA256 Signing**: Implements the signing algorithm required by Binance.
//! - **Environment Loading**: Credentials can be loaded from environment variables
//!   or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, RequestParams, RequestSigner};
//!
//! let credentials = ApiCredentials::from_env()?;
//! let signer = RequestSigner::new(&credentials);
//!
//! let mut params = RequestParams::new();
//! params.push("symbol", "BTCUSDT").push("side", "BUY");
//! let signature = signer.sign_params(&params);
//! params.push("signature", signature);
//! ```

mod credentials;
mod error;
mod params;
mod signer;

pub use credentials::{ApiCredentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::AuthError;
pub use params::{RedactedParams, RequestParams};
pub use signer::RequestSigner;
