//! Transport error types.

use thiserror::Error;

/// Errors that can occur while performing an HTTP exchange.
///
/// None of these are retried internally; the caller decides.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection-level failure (DNS, refused, reset, TLS).
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The server answered with a non-2xx status.
    ///
    /// `body` is the raw response text, unmodified, since it carries the
    /// exchange's own error code and message.
    #[error("Exchange rejected request: HTTP {status} - {body}")]
    ExchangeRejected {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// A 2xx response whose body could not be decoded.
    #[error("Invalid response: {reason}")]
    InvalidResponse {
        /// Decoder error message.
        reason: String,
        /// Response body, verbatim.
        body: String,
    },

    /// Failed to build the HTTP client.
    #[error("HTTP client build error: {0}")]
    ClientBuild(String),
}

impl TransportError {
    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ExchangeRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_builder() {
            TransportError::ClientBuild(err.to_string())
        } else if err.is_decode() {
            TransportError::InvalidResponse {
                reason: err.to_string(),
                body: String::new(),
            }
        } else {
            TransportError::NetworkFailure(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_exposes_status() {
        let err = TransportError::ExchangeRejected {
            status: 400,
            body: r#"{"code":-1111,"msg":"Precision over maximum"}"#.into(),
        };

        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("-1111"));
    }

    #[test]
    fn test_timeout_has_no_status() {
        assert_eq!(TransportError::Timeout.status(), None);
    }
}
