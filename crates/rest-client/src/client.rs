//! Generic REST client wrapper around reqwest.

use crate::error::TransportError;
use crate::sink::{FailureEvent, HttpEventSink, RequestEvent, ResponseEvent, TracingSink};
use auth::RequestParams;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Generic REST client for making HTTP requests.
///
/// Owns a pooled `reqwest::Client`; cheap to share behind an `Arc` across
/// concurrent callers.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    sink: Arc<dyn HttpEventSink>,
}

impl RestClient {
    /// Create a new REST client that reports to `tracing`.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://fapi.binance.com")
    /// * `timeout` - Per-request timeout, covering connect, send and body read
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        Self::with_sink(base_url, timeout, Arc::new(TracingSink))
    }

    /// Create a new REST client reporting to the given sink.
    pub fn with_sink(
        base_url: &str,
        timeout: Duration,
        sink: Arc<dyn HttpEventSink>,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            sink,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a request and return the body of a 2xx response.
    ///
    /// `params` are encoded in insertion order and sent as the query string.
    /// Non-2xx responses become [`TransportError::ExchangeRejected`] with the
    /// body untouched.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        params: Option<&RequestParams>,
        headers: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        let query = params.map(RequestParams::to_query_string);
        let url = self.build_url(path, query.as_deref());
        let log_url = self.build_url(path, None);

        self.sink.on_request(&RequestEvent {
            method: method.as_str(),
            url: &log_url,
            params: params.map(|p| p.redacted().to_string()).unwrap_or_default(),
        });

        let mut request = self.client.request(method.clone(), url.as_str());
        for (key, value) in headers {
            request = request.header(*key, *value);
        }

        let started = Instant::now();
        let outcome = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, TransportError>((status, body))
        }
        .await;
        let elapsed = started.elapsed();

        let (status, body) = match outcome {
            Ok(pair) => pair,
            Err(error) => {
                self.sink.on_failure(&FailureEvent {
                    method: method.as_str(),
                    url: &log_url,
                    error: &error,
                    elapsed,
                });
                return Err(error);
            }
        };

        self.sink.on_response(&ResponseEvent {
            method: method.as_str(),
            url: &log_url,
            status: status.as_u16(),
            body: &body,
            elapsed,
        });

        if status.is_success() {
            Ok(body)
        } else {
            Err(TransportError::ExchangeRejected {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Make a GET request and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&RequestParams>,
        headers: &[(&str, &str)],
    ) -> Result<T, TransportError> {
        let body = self.execute(Method::GET, path, params, headers).await?;
        parse_json(&body)
    }

    /// Build a full URL from path and optional query string.
    fn build_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}{}?{}", self.base_url, path, q),
            _ => format!("{}{}", self.base_url, path),
        }
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Decode a JSON body, keeping the raw text on failure.
pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(body = %body, error = %e, "Failed to parse response");
        TransportError::InvalidResponse {
            reason: e.to_string(),
            body: body.to_string(),
        }
    })
}
