//! Native auth: keypair-based signing.
//!
//! Only available with the `native-auth` feature.

use solana_keypair::Keypair;
use solana_signer::Signer;

use crate::auth::MessageSigner;
use crate::error::SdkError;
use crate::shared::Address;

impl MessageSigner for Keypair {
    fn sign_bytes(&self, message: &[u8]) -> Result<Vec<u8>, SdkError> {
        Ok(self.sign_message(message).as_ref().to_vec())
    }

    fn address(&self) -> Address {
        Address::from_pubkey(self.pubkey())
    }
}
