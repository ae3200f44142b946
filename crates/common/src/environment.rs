//! Binance futures environment configuration.
//!
//! Supports production and testnet environments with appropriate URLs.

use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the environment.
pub const ENVIRONMENT_ENV: &str = "BINANCE_ENVIRONMENT";

/// Binance USDⓈ-M futures environment (production or testnet).
///
/// Defaults to testnet so an unconfigured run never touches real funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FuturesEnvironment {
    /// Production environment (real money).
    Production,
    /// Testnet environment (fake money for testing).
    #[default]
    Testnet,
}

impl FuturesEnvironment {
    /// REST API base URL.
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://fapi.binance.com",
            Self::Testnet => "https://testnet.binancefuture.com",
        }
    }

    /// Returns true if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for FuturesEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Testnet => write!(f, "testnet"),
        }
    }
}

impl FromStr for FuturesEnvironment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" | "mainnet" | "main" => Ok(Self::Production),
            "testnet" | "test" | "sandbox" => Ok(Self::Testnet),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

/// Error parsing environment string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid environment '{0}', expected 'production' or 'testnet'")]
pub struct ParseEnvironmentError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_url() {
        let env = FuturesEnvironment::Production;
        assert_eq!(env.rest_base_url(), "https://fapi.binance.com");
        assert!(env.is_production());
    }

    #[test]
    fn test_testnet_url() {
        let env = FuturesEnvironment::Testnet;
        assert_eq!(env.rest_base_url(), "https://testnet.binancefuture.com");
        assert!(!env.is_production());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            "prod".parse::<FuturesEnvironment>().unwrap(),
            FuturesEnvironment::Production
        );
        assert_eq!(
            "MAINNET".parse::<FuturesEnvironment>().unwrap(),
            FuturesEnvironment::Production
        );
        assert_eq!(
            " sandbox ".parse::<FuturesEnvironment>().unwrap(),
            FuturesEnvironment::Testnet
        );
    }

    #[test]
    fn test_parse_invalid() {
        let err = "staging".parse::<FuturesEnvironment>().unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_default_is_testnet() {
        assert_eq!(FuturesEnvironment::default(), FuturesEnvironment::Testnet);
    }

    #[test]
    fn test_display() {
        assert_eq!(FuturesEnvironment::Production.to_string(), "production");
        assert_eq!(FuturesEnvironment::Testnet.to_string(), "testnet");
    }
}
