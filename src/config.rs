//! Relayer client configuration.
//!
//! A [`RelayerConfig`] can be deserialized from any serde source or read from
//! the environment, then handed to
//! [`RelayerClientBuilder::config`](crate::client::RelayerClientBuilder::config).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SdkError;
use crate::network::{DEFAULT_RELAYER_URL, DEFAULT_TIMEOUT_SECS};

pub const ENV_RELAYER_URL: &str = "RELAYER_URL";
pub const ENV_NETWORK_ID: &str = "RELAYER_NETWORK_ID";
pub const ENV_SUBNET_UID: &str = "RELAYER_SUBNET_UID";
pub const ENV_TIMEOUT_SECS: &str = "RELAYER_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayerConfig {
    #[serde(default = "default_relayer_url")]
    pub relayer_url: String,
    pub network_id: u32,
    pub subnet_uid: u16,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_relayer_url() -> String {
    DEFAULT_RELAYER_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for RelayerConfig {
    fn default() -> Self {
        Self {
            relayer_url: default_relayer_url(),
            network_id: 0,
            subnet_uid: 0,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RelayerConfig {
    /// Read the configuration from `RELAYER_*` environment variables.
    ///
    /// Unset variables keep their defaults; set but unparsable ones are errors.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_RELAYER_URL) {
            config.relayer_url = url;
        }
        if let Some(raw) = lookup(ENV_NETWORK_ID) {
            config.network_id = parse_var(ENV_NETWORK_ID, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SUBNET_UID) {
            config.subnet_uid = parse_var(ENV_SUBNET_UID, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = parse_var(ENV_TIMEOUT_SECS, &raw)?;
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, SdkError>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| SdkError::Validation(format!("{}={:?}: {}", key, raw, e)))
}
