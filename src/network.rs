//! Network URL constants for the relayer SDK.

/// Default relayer base URL.
pub const DEFAULT_RELAYER_URL: &str = "http://127.0.0.1:8000";

/// Path of the JSON-RPC endpoint, appended to the relayer base URL.
pub const JSONRPC_PATH: &str = "/api/jsonrpc";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Build the full JSON-RPC endpoint URL for a relayer base URL.
pub fn jsonrpc_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), JSONRPC_PATH)
}
