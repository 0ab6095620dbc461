//! JSON-RPC 2.0 envelopes for relayer calls.
//!
//! Requests carry a signed message as `params`. A response that has an `error`
//! member is an application error regardless of what else it contains; otherwise
//! its `result` member is decoded into the operation's result type.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::RpcError;

pub const JSONRPC_VERSION: &str = "2.0";

/// Relayer method names.
pub mod methods {
    pub const GET_MINERS: &str = "metagraph.get_miners";
    pub const GET_VALIDATORS: &str = "metagraph.get_validators";
    pub const REGISTER: &str = "relayer.register";
    pub const GET_HOTKEY_STORAGE: &str = "relayer.get_hotkey_storage";
    pub const SET_HOTKEY_STORAGE: &str = "relayer.set_hotkey_storage";
    pub const PERFORM_AUDIT: &str = "miner.perform_audit";
}

/// Outbound request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a, P: Serialize> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: P,
}

impl<'a, P: Serialize> RpcRequest<'a, P> {
    pub fn new(id: u64, method: &'a str, params: P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }
}

/// Decode a response document for `method`.
pub fn decode_response<R: DeserializeOwned>(method: &str, response: Value) -> Result<R, RpcError> {
    let Value::Object(mut doc) = response else {
        return Err(RpcError::MalformedResponse {
            method: method.to_string(),
        });
    };

    if let Some(error) = doc.remove("error") {
        return Err(RpcError::Relayer(error));
    }

    let result = doc.remove("result").ok_or_else(|| RpcError::MissingResult {
        method: method.to_string(),
    })?;

    serde_json::from_value(result).map_err(|source| RpcError::Decode {
        method: method.to_string(),
        source,
    })
}
