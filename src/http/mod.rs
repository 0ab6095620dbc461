//! HTTP layer: the transport seam and its reqwest implementation.

pub mod client;

pub use client::RelayerHttp;

use std::future::Future;

use serde_json::Value;

use crate::error::HttpError;

/// Exchanges one JSON document for another with the relayer's JSON-RPC endpoint.
///
/// [`RelayerHttp`] is the production implementation; tests substitute an
/// in-memory one.
pub trait RpcTransport: Send + Sync {
    fn send(&self, body: &Value) -> impl Future<Output = Result<Value, HttpError>> + Send;
}
