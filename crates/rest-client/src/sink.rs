//! Request/response event sinks.
//!
//! The HTTP client reports every exchange to a sink it is given at
//! construction. It never decides where those events end up.

use crate::error::TransportError;
use std::time::Duration;

/// An outgoing request.
#[derive(Debug, Clone)]
pub struct RequestEvent<'a> {
    pub method: &'a str,
    /// URL without the query string.
    pub url: &'a str,
    /// Parameters rendered with sensitive values masked.
    pub params: String,
}

/// A response received for a [`RequestEvent`].
#[derive(Debug, Clone)]
pub struct ResponseEvent<'a> {
    pub method: &'a str,
    pub url: &'a str,
    pub status: u16,
    pub body: &'a str,
    pub elapsed: Duration,
}

/// A request that produced no HTTP response.
#[derive(Debug, Clone)]
pub struct FailureEvent<'a> {
    pub method: &'a str,
    pub url: &'a str,
    pub error: &'a TransportError,
    pub elapsed: Duration,
}

/// Destination for HTTP exchange events.
pub trait HttpEventSink: Send + Sync {
    fn on_request(&self, event: &RequestEvent<'_>);

    fn on_response(&self, event: &ResponseEvent<'_>);

    fn on_failure(&self, event: &FailureEvent<'_>);
}

/// Forwards events to `tracing` under the `http` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl HttpEventSink for TracingSink {
    fn on_request(&self, event: &RequestEvent<'_>) {
        tracing::info!(
            target: "http",
            method = event.method,
            url = event.url,
            params = %event.params,
            "REQUEST"
        );
    }

    fn on_response(&self, event: &ResponseEvent<'_>) {
        if (200..300).contains(&event.status) {
            tracing::info!(
                target: "http",
                method = event.method,
                url = event.url,
                status = event.status,
                body = event.body,
                elapsed_ms = event.elapsed.as_millis() as u64,
                "RESPONSE"
            );
        } else {
            tracing::warn!(
                target: "http",
                method = event.method,
                url = event.url,
                status = event.status,
                body = event.body,
                elapsed_ms = event.elapsed.as_millis() as u64,
                "RESPONSE"
            );
        }
    }

    fn on_failure(&self, event: &FailureEvent<'_>) {
        tracing::error!(
            target: "http",
            method = event.method,
            url = event.url,
            error = %event.error,
            elapsed_ms = event.elapsed.as_millis() as u64,
            "REQUEST FAILED"
        );
    }
}
