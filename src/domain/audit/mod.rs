//! Audit domain: contract audit tasks relayed to miners.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

use crate::domain::metagraph::RelayerContext;
use crate::message::{Payload, SignedMessage};

/// A contract to audit, addressed to a miner uid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTask {
    pub uid: u16,
    pub contract_code: String,
}

impl Payload for AuditTask {}

/// An audit task signed by the requester.
pub type TaskModel = SignedMessage<AuditTask>;

/// Relayer context plus a signed task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRequest {
    #[serde(flatten)]
    pub context: RelayerContext,
    pub task: TaskModel,
}

impl Payload for AuditRequest {}

pub type PerformAuditMessage = SignedMessage<AuditRequest>;
