//! HTTP client for submitting contact details.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client serializes the form, maps transport
//! and status errors, and recognizes `201 Created` as the only success signal.

mod async_wrapper;
pub use async_wrapper::{AsyncContactClient, ContactSubmitter};

use crate::config::Config;
use crate::error::{SubmitError, SubmitResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::ContactDetails;
use std::sync::Arc;
use std::time::Duration;

/// The status code that marks a submission as accepted.
pub const CREATED: u16 = 201;

/// What the endpoint told us about an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// HTTP status of the response (always 201)
    pub status: u16,

    /// Identifier assigned by the endpoint, when the body carries one
    pub id: Option<String>,
}

/// HTTP client for the contact submission endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ContactClient {
    /// Full URL the form is POSTed to
    endpoint_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactClient {
    /// Create a new ContactClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.endpoint_url.clone(),
            Duration::from_secs(config.request_timeout),
            Metrics::new(),
        )
    }

    /// Create a ContactClient for a specific endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_endpoint(endpoint_url: String) -> Self {
        Self::build(endpoint_url, Duration::from_secs(10), Metrics::new())
    }

    /// Share an existing metrics collector with this client.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    fn build(endpoint_url: String, timeout: Duration, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            endpoint_url,
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// POST the contact details as JSON.
    ///
    /// Only `201 Created` counts as acceptance. Any other successful status is
    /// reported as `SubmitError::UnexpectedStatus`.
    pub fn submit(&self, details: &ContactDetails) -> SubmitResult<SubmitReceipt> {
        let body = serde_json::to_value(details)?;
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!("POST {}", self.endpoint_url);

        let result = self
            .agent
            .post(&self.endpoint_url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("POST {} - Error: {}", self.endpoint_url, e);
                timer.complete_with_error();
                return Err(e);
            }
        };

        let status = response.status();
        if status != CREATED {
            tracing::warn!("POST {} - Unexpected status {}", self.endpoint_url, status);
            timer.complete_with_error();
            return Err(SubmitError::UnexpectedStatus { status });
        }

        timer.complete();
        tracing::debug!("POST {} - Created", self.endpoint_url);

        let id = response
            .into_string()
            .ok()
            .and_then(|text| serde_json::from_str::<serde_json::Value>(&text).ok())
            .and_then(|value| Self::extract_id(&value));

        Ok(SubmitReceipt { status, id })
    }

    /// Pull the assigned id out of a created-resource body.
    fn extract_id(value: &serde_json::Value) -> Option<String> {
        match value.get("id")? {
            serde_json::Value::String(id) => Some(id.clone()),
            serde_json::Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    /// Map a ureq error to a SubmitError.
    fn map_error(&self, error: ureq::Error) -> SubmitError {
        match error {
            ureq::Error::Status(status, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                SubmitError::ApiError { status, message }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    SubmitError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    SubmitError::Timeout
                } else {
                    SubmitError::HttpError(transport.to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = Config {
            endpoint_url: "https://forms.test/users".to_string(),
            ..Config::default()
        };
        let client = ContactClient::new(&config);
        assert_eq!(client.endpoint_url(), "https://forms.test/users");
    }

    #[test]
    fn test_extract_id() {
        assert_eq!(
            ContactClient::extract_id(&json!({"id": 11})),
            Some("11".to_string())
        );
        assert_eq!(
            ContactClient::extract_id(&json!({"id": "abc"})),
            Some("abc".to_string())
        );
        assert_eq!(ContactClient::extract_id(&json!({"name": "Dale"})), None);
        assert_eq!(ContactClient::extract_id(&json!({"id": null})), None);
    }
}
