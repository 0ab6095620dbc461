//! Low-level HTTP client: `RelayerHttp`.
//!
//! POSTs JSON-RPC envelopes to `{relayer_url}/api/jsonrpc` and hands back the
//! response document. No retries: one request per call.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::HttpError;
use crate::http::RpcTransport;
use crate::network::{jsonrpc_url, DEFAULT_TIMEOUT_SECS};

/// reqwest-backed transport bound to one relayer endpoint.
pub struct RelayerHttp {
    endpoint: String,
    client: Client,
}

impl RelayerHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            endpoint: jsonrpc_url(base_url),
            client,
        })
    }

    /// Full URL of the JSON-RPC endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RpcTransport for RelayerHttp {
    async fn send(&self, body: &Value) -> Result<Value, HttpError> {
        let resp = self.client.post(&self.endpoint).json(body).send().await?;
        let status = resp.status();
        let body_text = resp.text().await?;

        match serde_json::from_str::<Value>(&body_text) {
            Ok(doc) if status.is_success() => Ok(doc),
            // Relayer errors can arrive with a non-2xx status.
            Ok(doc) if doc.get("error").is_some() => {
                tracing::debug!(status = status.as_u16(), "Relayer error with HTTP status");
                Ok(doc)
            }
            Ok(_) => Err(status_error(status, body_text)),
            Err(e) if status.is_success() => Err(HttpError::InvalidBody(e.to_string())),
            Err(_) => Err(status_error(status, body_text)),
        }
    }
}

fn status_error(status: StatusCode, body: String) -> HttpError {
    match status.as_u16() {
        401 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body),
        429 => HttpError::RateLimited,
        400..=499 => HttpError::BadRequest(body),
        code => HttpError::ServerError { status: code, body },
    }
}

impl Clone for RelayerHttp {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            client: self.client.clone(),
        }
    }
}
