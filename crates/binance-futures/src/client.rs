//! Binance futures REST client: server time sync and signed requests.

use crate::config::{FuturesClientConfig, API_KEY_HEADER, TIME_PATH};
use crate::error::FuturesError;
use crate::orders::SignedTransport;
use crate::responses::{OrderResult, ServerTimeResponse};
use async_trait::async_trait;
use auth::{ApiCredentials, RequestParams, RequestSigner};
use rest_client::{HttpEventSink, Method, RestClient, TracingSink, TransportError};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Binance futures REST client with authentication support.
///
/// Owns the credentials and the connection pool for its lifetime. Every
/// signed call fetches a fresh server timestamp first; nothing is cached
/// between calls, so the client is safe to share across tasks.
pub struct FuturesRestClient {
    client: RestClient,
    credentials: ApiCredentials,
    config: FuturesClientConfig,
}

impl FuturesRestClient {
    /// Create a client that reports HTTP exchanges to `tracing`.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(
        credentials: ApiCredentials,
        config: FuturesClientConfig,
    ) -> Result<Self, FuturesError> {
        Self::with_sink(credentials, config, Arc::new(TracingSink))
    }

    /// Create a client that reports HTTP exchanges to `sink`.
    pub fn with_sink(
        credentials: ApiCredentials,
        config: FuturesClientConfig,
        sink: Arc<dyn HttpEventSink>,
    ) -> Result<Self, FuturesError> {
        config.validate()?;
        let client = RestClient::with_sink(&config.base_url, config.timeout, sink)?;

        Ok(Self {
            client,
            credentials,
            config,
        })
    }

    // ========================================================================
    // Time Synchronization
    // ========================================================================

    /// Fetch the exchange's current time in milliseconds.
    ///
    /// GET /fapi/v1/time
    pub async fn fetch_server_time(&self) -> Result<i64, TransportError> {
        let before = Instant::now();
        let response: ServerTimeResponse = self.client.get(TIME_PATH, None, &[]).await?;
        let rtt = before.elapsed().as_millis() as i64;

        let local_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default();

        tracing::debug!(
            server_time = response.server_time,
            local_time = local_time,
            drift_ms = local_time - response.server_time,
            rtt_ms = rtt,
            "Fetched server time"
        );

        Ok(response.server_time)
    }

    // ========================================================================
    // Signed Requests
    // ========================================================================

    /// Stamp, sign and send `params`, returning the raw 2xx body.
    ///
    /// Appends `timestamp`, `recvWindow` and finally `signature`. If the
    /// time fetch fails, nothing is signed or sent.
    pub async fn send_signed_raw(
        &self,
        method: Method,
        path: &str,
        mut params: RequestParams,
    ) -> Result<String, TransportError> {
        let timestamp = self.fetch_server_time().await?;

        params.push("timestamp", timestamp);
        params.push("recvWindow", self.config.recv_window_ms);

        let signature = RequestSigner::new(&self.credentials).sign_params(&params);
        params.push("signature", signature);

        let headers = [(API_KEY_HEADER, self.credentials.api_key())];

        self.client
            .execute(method, path, Some(&params), &headers)
            .await
    }

    /// Signed request whose response is an order.
    pub async fn send_signed(
        &self,
        method: Method,
        path: &str,
        params: RequestParams,
    ) -> Result<OrderResult, TransportError> {
        let body = self.send_signed_raw(method, path, params).await?;
        OrderResult::from_body(&body)
    }
}

#[async_trait]
impl SignedTransport for FuturesRestClient {
    async fn send_signed(
        &self,
        method: Method,
        path: &str,
        params: RequestParams,
    ) -> Result<OrderResult, TransportError> {
        FuturesRestClient::send_signed(self, method, path, params).await
    }
}

impl std::fmt::Debug for FuturesRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuturesRestClient")
            .field("base_url", &self.config.base_url)
            .field("api_key", &self.credentials.api_key())
            .field("recv_window_ms", &self.config.recv_window_ms)
            .field("timeout", &self.config.timeout)
            .finish()
    }
}
