//! Secure API credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of secret keys
//! and ensures memory is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "BINANCE_API_KEY";

/// Environment variable holding the API secret.
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// API credentials for authenticated requests.
///
/// The secret key is wrapped in `SecretString` which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    api_secret: SecretString,
}

impl ApiCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `BINANCE_API_KEY` - The API key (public)
    /// - `BINANCE_API_SECRET` - The secret key (private)
    ///
    /// A `.env` file is not read here; callers load it once at startup.
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` if either variable is not set, or
    /// `AuthError::EmptyCredential` if one is set to an empty string.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AuthError> {
        let api_key =
            lookup(API_KEY_ENV).ok_or_else(|| AuthError::MissingEnvVar(API_KEY_ENV.into()))?;

        let api_secret = lookup(API_SECRET_ENV)
            .ok_or_else(|| AuthError::MissingEnvVar(API_SECRET_ENV.into()))?;

        Self::new(api_key, api_secret)
    }

    /// Create credentials from explicit values.
    ///
    /// # Errors
    /// Returns `AuthError::EmptyCredential` if either value is blank.
    pub fn new(api_key: String, api_secret: String) -> Result<Self, AuthError> {
        if api_key.trim().is_empty() {
            return Err(AuthError::EmptyCredential("api_key"));
        }
        if api_secret.trim().is_empty() {
            return Err(AuthError::EmptyCredential("api_secret"));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Get the API key (public, safe to log).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the secret key for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub(crate) fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_new() {
        let creds = ApiCredentials::new("my_api_key".into(), "my_secret".into()).unwrap();
        assert_eq!(creds.api_key(), "my_api_key");
        assert_eq!(creds.expose_secret(), "my_secret");
    }

    #[test]
    fn test_empty_secret_rejected() {
        let err = ApiCredentials::new("my_api_key".into(), "".into()).unwrap_err();
        assert_eq!(err, AuthError::EmptyCredential("api_secret"));
    }

    #[test]
    fn test_blank_key_rejected() {
        let err = ApiCredentials::new("   ".into(), "secret".into()).unwrap_err();
        assert_eq!(err, AuthError::EmptyCredential("api_key"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = ApiCredentials::new("my_api_key".into(), "super_secret_key".into()).unwrap();
        let debug_str = format!("{:?}", creds);

        assert!(debug_str.contains("my_api_key"));
        assert!(!debug_str.contains("super_secret_key"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_from_lookup_reads_only_the_given_source() {
        let err = ApiCredentials::from_lookup(|_| None).unwrap_err();
        assert_eq!(err, AuthError::MissingEnvVar(API_KEY_ENV.into()));

        let err = ApiCredentials::from_lookup(|name| {
            (name == API_KEY_ENV).then(|| "my_api_key".to_string())
        })
        .unwrap_err();
        assert_eq!(err, AuthError::MissingEnvVar(API_SECRET_ENV.into()));

        let creds = ApiCredentials::from_lookup(|name| match name {
            API_KEY_ENV => Some("my_api_key".into()),
            API_SECRET_ENV => Some("my_secret".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(creds.api_key(), "my_api_key");
    }
}
