//! Authentication: the keypair capability and the signing primitives.
//!
//! ## Signature Model
//!
//! - A [`MessageSigner`] turns bytes into a raw signature and reports its address.
//!   Any key material can implement it; the `native-auth` feature provides an
//!   implementation for `solana_keypair::Keypair` (ed25519).
//! - [`sign`] hex-encodes the raw signature with a `0x` prefix and pairs it with
//!   the signer's address.
//! - [`verify`] never fails loudly: empty credentials, malformed addresses and
//!   malformed signatures all yield `false`. [`verify_strict`] runs the same checks
//!   and reports the reason as a [`VerifyError`].
//!
//! Verification reconstructs an ed25519 public key from the base58 address.

#[cfg(feature = "native-auth")]
pub mod native;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;
use solana_signature::Signature;

use crate::error::{SdkError, VerifyError};
use crate::shared::Address;

/// Prefix of every encoded signature.
pub const SIGNATURE_PREFIX: &str = "0x";

/// Key material able to sign bytes and report its public address.
pub trait MessageSigner {
    /// Sign `message`, returning the raw signature bytes.
    ///
    /// Signers backed by a remote service or device report failures as
    /// [`SdkError::Signer`].
    fn sign_bytes(&self, message: &[u8]) -> Result<Vec<u8>, SdkError>;

    /// The signer's public address string.
    fn address(&self) -> Address;
}

impl<S: MessageSigner + ?Sized> MessageSigner for &S {
    fn sign_bytes(&self, message: &[u8]) -> Result<Vec<u8>, SdkError> {
        (**self).sign_bytes(message)
    }

    fn address(&self) -> Address {
        (**self).address()
    }
}

/// An encoded signature together with the address that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignaturePair {
    /// `0x`-prefixed lowercase hex.
    pub signature: String,
    pub address: Address,
}

/// Sign `payload` with `signer`. Errors are the signer's own.
pub fn sign<S: MessageSigner + ?Sized>(
    payload: &[u8],
    signer: &S,
) -> Result<SignaturePair, SdkError> {
    let raw = signer.sign_bytes(payload)?;
    Ok(SignaturePair {
        signature: encode_signature(&raw),
        address: signer.address(),
    })
}

/// Check `signature` over `payload` against `address`.
///
/// Returns `false` without doing any cryptographic work when either credential
/// is missing or empty.
pub fn verify(payload: &[u8], signature: Option<&str>, address: Option<&str>) -> bool {
    match verify_strict(payload, signature, address) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "Signature verification failed");
            false
        }
    }
}

/// Like [`verify`], but reports why verification failed.
pub fn verify_strict(
    payload: &[u8],
    signature: Option<&str>,
    address: Option<&str>,
) -> Result<(), VerifyError> {
    let (signature, address) = match (signature, address) {
        (Some(s), Some(a)) if !s.is_empty() && !a.is_empty() => (s, a),
        _ => return Err(VerifyError::Unsigned),
    };

    let pubkey = Pubkey::from_str(address).map_err(|e| VerifyError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })?;
    let sig = decode_signature(signature)?;

    if !sig.verify(pubkey.as_ref(), payload) {
        return Err(VerifyError::Mismatch);
    }
    Ok(())
}

/// Encode raw signature bytes as `0x`-prefixed hex.
pub fn encode_signature(bytes: &[u8]) -> String {
    format!("{}{}", SIGNATURE_PREFIX, hex::encode(bytes))
}

/// Decode a hex signature (the `0x` prefix is optional).
pub fn decode_signature(encoded: &str) -> Result<Signature, VerifyError> {
    let digits = encoded.strip_prefix(SIGNATURE_PREFIX).unwrap_or(encoded);
    let bytes = hex::decode(digits).map_err(|e| VerifyError::InvalidSignature(e.to_string()))?;
    Signature::try_from(bytes.as_slice()).map_err(|_| {
        VerifyError::InvalidSignature(format!("expected 64 bytes, got {}", bytes.len()))
    })
}
