//! Registration domain: announcing an axon to the relayer.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

use crate::domain::metagraph::RelayerContext;
use crate::message::{Payload, SignedMessage};

/// Role of a registering node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Miner,
    Validator,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Miner => "miner",
            Self::Validator => "validator",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-supplied registration fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterParams {
    pub uid: u16,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub ip: String,
    pub port: u16,
}

/// Relayer context plus registration fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(flatten)]
    pub context: RelayerContext,
    #[serde(flatten)]
    pub params: RegisterParams,
}

impl Payload for Registration {}

pub type RegisterMessage = SignedMessage<Registration>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registration() -> Registration {
        Registration {
            context: RelayerContext {
                network_id: 2,
                subnet_uid: 7,
            },
            params: RegisterParams {
                uid: 11,
                node_type: NodeType::Validator,
                ip: "192.168.1.5".to_string(),
                port: 8091,
            },
        }
    }

    #[test]
    fn test_register_message_flattens_parent_fields() {
        let msg = RegisterMessage::new(registration());
        assert_eq!(
            msg.to_value().unwrap(),
            json!({
                "network_id": 2,
                "subnet_uid": 7,
                "uid": 11,
                "type": "validator",
                "ip": "192.168.1.5",
                "port": 8091,
                "signature": null,
                "ss58_address": null
            })
        );
    }

    #[test]
    fn test_register_canonical_form_is_sorted() {
        let msg = RegisterMessage::new(registration());
        assert_eq!(
            String::from_utf8(msg.to_signable().unwrap()).unwrap(),
            r#"{"ip":"192.168.1.5","network_id":2,"port":8091,"subnet_uid":7,"type":"validator","uid":11}"#
        );
    }

    #[test]
    fn test_register_message_roundtrip() {
        let msg = RegisterMessage::new(registration());
        let back: RegisterMessage = serde_json::from_value(msg.to_value().unwrap()).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_node_type_serde() {
        let t: NodeType = serde_json::from_str("\"miner\"").unwrap();
        assert_eq!(t, NodeType::Miner);
        assert_eq!(NodeType::Validator.to_string(), "validator");
    }
}
