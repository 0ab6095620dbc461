//! Signed messages: a generic envelope around any serializable payload.
//!
//! [`SignedMessage<T>`] flattens the payload's fields next to two optional
//! credential fields, `signature` and `ss58_address`. The bytes that get signed
//! are the payload's [canonical form](canonical::to_canonical_bytes): the
//! credential fields are never part of them.
//!
//! Every message type in the crate is a `SignedMessage` over a different payload,
//! so signing, verification and canonicalization are identical across all of them.
//!
//! ```rust,ignore
//! let mut msg = SignedMessage::new(RelayerContext { network_id: 1, subnet_uid: 42 });
//! msg.sign(&keypair)?;
//! assert!(msg.verify());
//! ```

pub mod canonical;
pub mod timestamped;

pub use canonical::to_canonical_bytes;
pub use timestamped::{Timestamped, TimestampedMessage};

use serde::{Deserialize, Serialize};

use crate::auth::{self, MessageSigner};
use crate::error::{SdkError, VerifyError};
use crate::shared::{Address, Clock, SystemClock};

/// Wire names of the credential fields, excluded from the canonical form.
pub const SIGNATURE_FIELD: &str = "signature";
pub const ADDRESS_FIELD: &str = "ss58_address";

/// Free-form payload fields.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// A payload that can be carried by a [`SignedMessage`].
pub trait Payload: Serialize {
    /// Hook run immediately before the canonical form is computed for signing.
    fn before_sign(&mut self, _clock: &dyn Clock) {}
}

impl Payload for Fields {}

/// A payload plus the signature and address that attest to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedMessage<T> {
    #[serde(flatten)]
    pub payload: T,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default, rename = "ss58_address")]
    pub address: Option<Address>,
}

impl<T> SignedMessage<T> {
    /// Wrap an unsigned payload.
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            signature: None,
            address: None,
        }
    }

    /// Whether both credential fields are present and non-empty.
    pub fn is_signed(&self) -> bool {
        matches!(
            (&self.signature, &self.address),
            (Some(s), Some(a)) if !s.is_empty() && !a.is_empty()
        )
    }

    /// Drop the credentials and return the payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<T: Serialize> SignedMessage<T> {
    /// The canonical bytes of the payload, i.e. exactly what is signed.
    pub fn to_signable(&self) -> Result<Vec<u8>, serde_json::Error> {
        to_canonical_bytes(&self.payload)
    }

    /// Safe-mode verification: any failure is reported as `false`.
    pub fn verify(&self) -> bool {
        match self.verify_strict() {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, address = ?self.address, "Message verification failed");
                false
            }
        }
    }

    /// Strict-mode verification: any failure is reported as a [`VerifyError`].
    pub fn verify_strict(&self) -> Result<(), VerifyError> {
        if !self.is_signed() {
            return Err(VerifyError::Unsigned);
        }
        let signable = self
            .to_signable()
            .map_err(|e| VerifyError::Canonicalization(e.to_string()))?;
        auth::verify_strict(
            &signable,
            self.signature.as_deref(),
            self.address.as_ref().map(Address::as_str),
        )
    }

    /// Serialize the whole message (payload and credentials) to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl<T: Payload> SignedMessage<T> {
    /// Sign with `signer`, reading the current time from the system clock.
    pub fn sign<S: MessageSigner + ?Sized>(&mut self, signer: &S) -> Result<(), SdkError> {
        self.sign_with_clock(signer, &SystemClock)
    }

    /// Sign with `signer`, using `clock` for any time-dependent payload fields.
    ///
    /// Replaces existing credentials. If the signer fails, they are left as they were.
    pub fn sign_with_clock<S: MessageSigner + ?Sized>(
        &mut self,
        signer: &S,
        clock: &dyn Clock,
    ) -> Result<(), SdkError> {
        self.payload.before_sign(clock);
        let signable = self.to_signable()?;
        let pair = auth::sign(&signable, signer)?;
        self.signature = Some(pair.signature);
        self.address = Some(pair.address);
        Ok(())
    }

    /// Build and sign in one step.
    pub fn signed<S: MessageSigner + ?Sized>(
        payload: T,
        signer: &S,
    ) -> Result<Self, SdkError> {
        let mut message = Self::new(payload);
        message.sign(signer)?;
        Ok(message)
    }
}

impl<T: Default> Default for SignedMessage<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for SignedMessage<T> {
    fn from(payload: T) -> Self {
        Self::new(payload)
    }
}
