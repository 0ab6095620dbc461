//! # Audit Relayer SDK
//!
//! Signed-message protocol and JSON-RPC client for talking to the audit subnet
//! relayer.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Shared newtypes, errors, signed messages, domain payloads
//! 2. **Auth**: The keypair capability and the `sign` / `verify` primitives
//! 3. **HTTP**: `RpcTransport` seam and the reqwest-backed `RelayerHttp`
//! 4. **High-Level Client**: `RelayerClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use audit_relayer_sdk::prelude::*;
//!
//! let client = RelayerClient::builder()
//!     .relayer_url("https://relayer.example")
//!     .network_id(1)
//!     .subnet_uid(42)
//!     .build()?;
//!
//! let miners = client.metagraph().get_miners(&keypair).await?;
//! let stored = client.storage().get_storage(&keypair).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and the clock capability.
pub mod shared;

/// Signed message envelope, canonical form, timestamped payloads.
pub mod message;

/// Domain modules (vertical slices): payloads, message aliases, sub-clients.
pub mod domain;

/// JSON-RPC envelopes and response decoding.
pub mod rpc;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Client configuration.
pub mod config;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Keypair capability and signing primitives.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Transport seam and HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `RelayerClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Address, Clock, FixedClock, SystemClock};

    // Signed messages
    pub use crate::message::{
        Fields, Payload, SignedMessage, Timestamped, TimestampedMessage,
    };

    // Domain types
    pub use crate::domain::audit::{AuditRequest, AuditTask, PerformAuditMessage, TaskModel};
    pub use crate::domain::metagraph::{AxonInfo, RelayerContext, RelayerMessage};
    pub use crate::domain::registration::{
        NodeType, RegisterMessage, RegisterParams, Registration,
    };
    pub use crate::domain::storage::{
        HotkeyStorage, MinerStorage, MinerStorageData, StorageMessage, StorageUpdate,
        ValidatorStorage, ValidatorStorageData,
    };
    pub use crate::domain::ResultModel;

    // Auth
    pub use crate::auth::{sign, verify, verify_strict, MessageSigner, SignaturePair};

    // Errors
    pub use crate::error::{HttpError, RpcError, SdkError, VerifyError};

    // Config + network
    pub use crate::config::RelayerConfig;
    pub use crate::network::DEFAULT_RELAYER_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuditsClient, MetagraphClient, RegistryClient, RelayerClient, RelayerClientBuilder,
        StorageClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{RelayerHttp, RpcTransport};
}
