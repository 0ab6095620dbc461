//! Storage domain: per-hotkey state persisted by the relayer.
//!
//! Storage payloads are signed twice: once by their owner as a standalone
//! message, then again as part of the [`StorageMessage`] envelope that carries
//! them. The envelope embeds the already-signed storage as plain JSON, so the
//! inner signature can be checked on its own after the envelope is discarded.

#[cfg(feature = "http")]
pub mod client;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::auth::MessageSigner;
use crate::domain::metagraph::RelayerContext;
use crate::error::{SdkError, VerifyError};
use crate::message::{Payload, SignedMessage};

/// Miner-owned storage fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinerStorageData {
    pub collection_id: i64,
}

impl Payload for MinerStorageData {}

/// Validator-owned storage fields.
///
/// Scores keep their JSON number representation so integer and float entries
/// serialize exactly as they were given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorStorageData {
    pub last_validation: i64,
    pub scores: BTreeMap<String, Vec<Number>>,
    pub hotkeys: BTreeMap<String, String>,
}

impl Payload for ValidatorStorageData {}

pub type MinerStorage = SignedMessage<MinerStorageData>;
pub type ValidatorStorage = SignedMessage<ValidatorStorageData>;

/// Either kind of hotkey storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotkeyStorage {
    Validator(ValidatorStorage),
    Miner(MinerStorage),
}

impl HotkeyStorage {
    pub fn sign<S: MessageSigner + ?Sized>(&mut self, signer: &S) -> Result<(), SdkError> {
        match self {
            Self::Validator(storage) => storage.sign(signer),
            Self::Miner(storage) => storage.sign(signer),
        }
    }

    pub fn is_signed(&self) -> bool {
        match self {
            Self::Validator(storage) => storage.is_signed(),
            Self::Miner(storage) => storage.is_signed(),
        }
    }

    pub fn verify(&self) -> bool {
        self.verify_strict().is_ok()
    }

    pub fn verify_strict(&self) -> Result<(), VerifyError> {
        match self {
            Self::Validator(storage) => storage.verify_strict(),
            Self::Miner(storage) => storage.verify_strict(),
        }
    }

    /// The storage as the JSON object embedded in a [`StorageMessage`].
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl From<MinerStorage> for HotkeyStorage {
    fn from(storage: MinerStorage) -> Self {
        Self::Miner(storage)
    }
}

impl From<ValidatorStorage> for HotkeyStorage {
    fn from(storage: ValidatorStorage) -> Self {
        Self::Validator(storage)
    }
}

/// Relayer context plus an embedded, already-serialized storage payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageUpdate {
    #[serde(flatten)]
    pub context: RelayerContext,
    pub storage: serde_json::Value,
}

impl Payload for StorageUpdate {}

pub type StorageMessage = SignedMessage<StorageUpdate>;

impl StorageMessage {
    /// Decode the embedded storage for independent verification.
    pub fn embedded_storage(&self) -> Result<HotkeyStorage, serde_json::Error> {
        serde_json::from_value(self.payload.storage.clone())
    }
}
