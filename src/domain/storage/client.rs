//! Storage sub-client: read and write the signer's hotkey storage.

use crate::auth::MessageSigner;
use crate::client::RelayerClient;
use crate::domain::metagraph::RelayerMessage;
use crate::domain::storage::{HotkeyStorage, StorageMessage, StorageUpdate};
use crate::domain::ResultModel;
use crate::error::SdkError;
use crate::http::{RelayerHttp, RpcTransport};
use crate::rpc::methods;

pub struct Storage<'a, T = RelayerHttp> {
    pub(crate) client: &'a RelayerClient<T>,
}

impl<'a, T: RpcTransport> Storage<'a, T> {
    /// Fetch the signer's stored payload.
    ///
    /// Decode it with [`ResultModel::decode_result`] into a [`HotkeyStorage`] to
    /// check the owner's signature.
    pub async fn get_storage<S: MessageSigner + ?Sized>(
        &self,
        signer: &S,
    ) -> Result<ResultModel, SdkError> {
        let id = self.client.next_call_id();
        let message = RelayerMessage::signed(self.client.context(), signer)?;
        self.client
            .dispatch(id, methods::GET_HOTKEY_STORAGE, &message)
            .await
    }

    /// Sign `storage` with `signer`, embed it, and sign the envelope with `signer`.
    pub async fn set_storage<S: MessageSigner + ?Sized>(
        &self,
        signer: &S,
        storage: impl Into<HotkeyStorage>,
    ) -> Result<ResultModel, SdkError> {
        let id = self.client.next_call_id();
        let mut storage = storage.into();
        storage.sign(signer)?;
        self.send_storage(id, signer, &storage).await
    }

    /// Embed storage already signed by its owner, signing only the envelope.
    ///
    /// Lets a relay identity forward storage owned by a different key.
    pub async fn set_signed_storage<S: MessageSigner + ?Sized>(
        &self,
        signer: &S,
        storage: &HotkeyStorage,
    ) -> Result<ResultModel, SdkError> {
        let id = self.client.next_call_id();
        if !storage.is_signed() {
            return Err(SdkError::Validation(
                "storage must be signed by its owner before embedding".to_string(),
            ));
        }
        self.send_storage(id, signer, storage).await
    }

    async fn send_storage<S: MessageSigner + ?Sized>(
        &self,
        id: u64,
        signer: &S,
        storage: &HotkeyStorage,
    ) -> Result<ResultModel, SdkError> {
        let message = StorageMessage::signed(
            StorageUpdate {
                context: self.client.context(),
                storage: storage.to_value()?,
            },
            signer,
        )?;
        self.client
            .dispatch(id, methods::SET_HOTKEY_STORAGE, &message)
            .await
    }
}
