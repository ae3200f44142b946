//! Binance futures client error types.

use crate::responses::ApiErrorResponse;
use auth::AuthError;
use execution_core::ValidationError;
use rest_client::TransportError;
use thiserror::Error;

/// Errors surfaced by the futures client.
///
/// Nothing is retried internally; every failure reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuturesError {
    /// Missing or empty credentials.
    #[error("Configuration error: {0}")]
    Configuration(#[from] AuthError),

    /// Invalid client settings (base URL, recvWindow, environment).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Order input rejected before any request was made.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Time sync or order request failed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Coarse classification for branching on a [`FuturesError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Validation,
    Timeout,
    NetworkFailure,
    ExchangeRejected,
    InvalidResponse,
}

impl FuturesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) | Self::InvalidConfig(_) => ErrorKind::Configuration,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Transport(err) => match err {
                TransportError::Timeout => ErrorKind::Timeout,
                TransportError::NetworkFailure(_) | TransportError::ClientBuild(_) => {
                    ErrorKind::NetworkFailure
                }
                TransportError::ExchangeRejected { .. } => ErrorKind::ExchangeRejected,
                TransportError::InvalidResponse { .. } => ErrorKind::InvalidResponse,
            },
        }
    }

    /// The exchange's `{"code", "msg"}` payload, when the request was rejected
    /// with one.
    pub fn exchange_error(&self) -> Option<ApiErrorResponse> {
        match self {
            Self::Transport(TransportError::ExchangeRejected { body, .. }) => {
                ApiErrorResponse::parse(body)
            }
            _ => None,
        }
    }
}
