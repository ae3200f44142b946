//! Client settings.

use crate::error::FuturesError;
use common::{FuturesEnvironment, ENVIRONMENT_ENV};
use std::time::Duration;

/// Header carrying the API key on signed requests.
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Server time endpoint.
pub const TIME_PATH: &str = "/fapi/v1/time";

/// New order endpoint.
pub const ORDER_PATH: &str = "/fapi/v1/order";

/// Default `recvWindow` in milliseconds.
pub const DEFAULT_RECV_WINDOW_MS: u64 = 5_000;

/// Largest `recvWindow` the exchange accepts.
pub const MAX_RECV_WINDOW_MS: u64 = 60_000;

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable overriding the REST base URL.
pub const BASE_URL_ENV: &str = "BINANCE_BASE_URL";

/// Environment variable overriding `recvWindow`.
pub const RECV_WINDOW_ENV: &str = "BINANCE_RECV_WINDOW";

/// Settings for [`FuturesRestClient`](crate::FuturesRestClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuturesClientConfig {
    /// REST base URL, without trailing slash.
    pub base_url: String,
    /// Server-side tolerance for request timestamps, in milliseconds.
    pub recv_window_ms: u64,
    /// Per-request timeout applied to both the time and the order call.
    pub timeout: Duration,
}

impl Default for FuturesClientConfig {
    fn default() -> Self {
        Self::for_environment(FuturesEnvironment::default())
    }
}

impl FuturesClientConfig {
    /// Defaults for the given environment.
    pub fn for_environment(environment: FuturesEnvironment) -> Self {
        Self {
            base_url: environment.rest_base_url().to_string(),
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Load from `BINANCE_ENVIRONMENT`, `BINANCE_BASE_URL` and
    /// `BINANCE_RECV_WINDOW`.
    pub fn from_env() -> Result<Self, FuturesError> {
        Self::from_env_with(None)
    }

    /// Like [`from_env`](Self::from_env), but `environment` takes precedence
    /// over `BINANCE_ENVIRONMENT`. `BINANCE_BASE_URL` still overrides the
    /// environment's URL.
    pub fn from_env_with(environment: Option<FuturesEnvironment>) -> Result<Self, FuturesError> {
        Self::from_lookup(environment, |name| std::env::var(name).ok())
    }

    fn from_lookup(
        environment: Option<FuturesEnvironment>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, FuturesError> {
        let environment = match (environment, lookup(ENVIRONMENT_ENV)) {
            (Some(environment), _) => environment,
            (None, Some(raw)) => raw
                .parse::<FuturesEnvironment>()
                .map_err(|e| FuturesError::InvalidConfig(e.to_string()))?,
            (None, None) => FuturesEnvironment::default(),
        };
        let mut config = Self::for_environment(environment);

        if let Some(url) = lookup(BASE_URL_ENV) {
            config = config.with_base_url(url);
        }

        if let Some(raw) = lookup(RECV_WINDOW_ENV) {
            let ms = raw.trim().parse::<u64>().map_err(|_| {
                FuturesError::InvalidConfig(format!("{RECV_WINDOW_ENV} must be an integer, got '{raw}'"))
            })?;
            config = config.with_recv_window_ms(ms);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_recv_window_ms(mut self, recv_window_ms: u64) -> Self {
        self.recv_window_ms = recv_window_ms;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check ranges before any client is built.
    pub fn validate(&self) -> Result<(), FuturesError> {
        if self.base_url.trim().is_empty() {
            return Err(FuturesError::InvalidConfig("base URL is empty".into()));
        }
        if self.recv_window_ms == 0 || self.recv_window_ms > MAX_RECV_WINDOW_MS {
            return Err(FuturesError::InvalidConfig(format!(
                "recvWindow must be within 1..={MAX_RECV_WINDOW_MS} ms, got {}",
                self.recv_window_ms
            )));
        }
        if self.timeout.is_zero() {
            return Err(FuturesError::InvalidConfig("timeout must be non-zero".into()));
        }
        Ok(())
    }
}
