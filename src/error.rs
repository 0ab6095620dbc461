//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    #[error("Verification error: {0}")]
    Verify(#[from] VerifyError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Signer error: {0}")]
    Signer(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Response is not valid JSON: {0}")]
    InvalidBody(String),
}

/// JSON-RPC application and decoding errors.
#[derive(Error, Debug)]
pub enum RpcError {
    /// The relayer answered with an `error` member. The payload is kept verbatim.
    #[error("Relayer returned an error: {0}")]
    Relayer(serde_json::Value),

    #[error("Response to {method} has no result")]
    MissingResult { method: String },

    #[error("Failed to decode result of {method}: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response to {method} is not a JSON object")]
    MalformedResponse { method: String },
}

impl RpcError {
    /// The relayer's error payload, if this is an application error.
    pub fn relayer_payload(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Relayer(payload) => Some(payload),
            _ => None,
        }
    }
}

/// Signature verification errors (strict mode).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Message is not signed")]
    Unsigned,

    #[error("Invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Invalid signature encoding: {0}")]
    InvalidSignature(String),

    #[error("Signature does not match payload and address")]
    Mismatch,

    #[error("Payload cannot be canonicalized: {0}")]
    Canonicalization(String),
}
