//! High-level client: `RelayerClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the call-id counter and the dispatch path
//! every sub-client goes through.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::RelayerConfig;
use crate::domain::audit::client::Audits;
use crate::domain::metagraph::client::Metagraph;
use crate::domain::metagraph::RelayerContext;
use crate::domain::registration::client::Registry;
use crate::domain::storage::client::Storage;
use crate::error::{RpcError, SdkError};
use crate::http::{RelayerHttp, RpcTransport};
use crate::rpc::{decode_response, RpcRequest};

// Re-export sub-client types for convenience.
pub use crate::domain::audit::client::Audits as AuditsClient;
pub use crate::domain::metagraph::client::Metagraph as MetagraphClient;
pub use crate::domain::registration::client::Registry as RegistryClient;
pub use crate::domain::storage::client::Storage as StorageClient;

/// The primary entry point of the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.metagraph()`, `client.storage()`, etc.
///
/// Call ids start at 1 and are taken once per call, whether or not the call
/// succeeds.
pub struct RelayerClient<T = RelayerHttp> {
    pub(crate) transport: T,
    context: RelayerContext,
    call_id: AtomicU64,
}

impl RelayerClient {
    pub fn builder() -> RelayerClientBuilder {
        RelayerClientBuilder::default()
    }
}

impl<T: RpcTransport> RelayerClient<T> {
    /// Build a client over a custom transport.
    pub fn with_transport(transport: T, network_id: u32, subnet_uid: u16) -> Self {
        Self {
            transport,
            context: RelayerContext {
                network_id,
                subnet_uid,
            },
            call_id: AtomicU64::new(0),
        }
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn metagraph(&self) -> Metagraph<'_, T> {
        Metagraph { client: self }
    }

    pub fn registry(&self) -> Registry<'_, T> {
        Registry { client: self }
    }

    pub fn storage(&self) -> Storage<'_, T> {
        Storage { client: self }
    }

    pub fn audits(&self) -> Audits<'_, T> {
        Audits { client: self }
    }

    // ── Session state ────────────────────────────────────────────────────

    /// Network and subnet every message is built with.
    pub fn context(&self) -> RelayerContext {
        self.context
    }

    /// Id of the most recent call, `0` before the first one.
    pub fn last_call_id(&self) -> u64 {
        self.call_id.load(Ordering::SeqCst)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ── Dispatch ─────────────────────────────────────────────────────────

    pub(crate) fn next_call_id(&self) -> u64 {
        self.call_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Send `params` as call `id` of `method` and decode the result.
    pub(crate) async fn dispatch<P: Serialize, R: DeserializeOwned>(
        &self,
        id: u64,
        method: &str,
        params: &P,
    ) -> Result<R, SdkError> {
        let envelope = serde_json::to_value(RpcRequest::new(id, method, params))?;
        tracing::debug!(id, method, "Dispatching relayer call");

        let response = self.transport.send(&envelope).await?;

        decode_response(method, response).map_err(|e| {
            match &e {
                RpcError::Relayer(payload) => {
                    tracing::warn!(id, method, error = %payload, "Relayer returned an error")
                }
                other => tracing::debug!(id, method, error = %other, "Undecodable relayer response"),
            }
            SdkError::from(e)
        })
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct RelayerClientBuilder {
    relayer_url: String,
    network_id: u32,
    subnet_uid: u16,
    timeout: Duration,
}

impl Default for RelayerClientBuilder {
    fn default() -> Self {
        let config = RelayerConfig::default();
        Self {
            relayer_url: config.relayer_url.clone(),
            network_id: config.network_id,
            subnet_uid: config.subnet_uid,
            timeout: config.timeout(),
        }
    }
}

impl RelayerClientBuilder {
    /// Take every setting from `config`.
    pub fn config(mut self, config: &RelayerConfig) -> Self {
        self.relayer_url = config.relayer_url.clone();
        self.network_id = config.network_id;
        self.subnet_uid = config.subnet_uid;
        self.timeout = config.timeout();
        self
    }

    pub fn relayer_url(mut self, url: &str) -> Self {
        self.relayer_url = url.to_string();
        self
    }

    pub fn network_id(mut self, network_id: u32) -> Self {
        self.network_id = network_id;
        self
    }

    pub fn subnet_uid(mut self, subnet_uid: u16) -> Self {
        self.subnet_uid = subnet_uid;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<RelayerClient, SdkError> {
        if self.relayer_url.trim().is_empty() {
            return Err(SdkError::Validation("relayer_url is empty".to_string()));
        }
        let transport = RelayerHttp::with_timeout(&self.relayer_url, self.timeout)?;
        Ok(RelayerClient::with_transport(
            transport,
            self.network_id,
            self.subnet_uid,
        ))
    }
}
