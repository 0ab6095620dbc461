//! Metagraph domain: relayer context and axon records.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

use crate::message::{Payload, SignedMessage};
use crate::shared::Address;

/// Network and subnet a request is addressed to. Root of every relayer message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayerContext {
    pub network_id: u32,
    pub subnet_uid: u16,
}

impl Payload for RelayerContext {}

/// The base relayer request: just the signed context.
pub type RelayerMessage = SignedMessage<RelayerContext>;

/// A network participant's endpoint as reported by the metagraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxonInfo {
    pub uid: u16,
    pub ip: String,
    pub port: u16,
    pub hotkey: Option<Address>,
    pub coldkey: Option<Address>,
}

impl AxonInfo {
    /// `ip:port` of the axon.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
