//! Metagraph sub-client: miner and validator listings.

use crate::auth::MessageSigner;
use crate::client::RelayerClient;
use crate::domain::metagraph::{AxonInfo, RelayerMessage};
use crate::error::SdkError;
use crate::http::{RelayerHttp, RpcTransport};
use crate::rpc::methods;

pub struct Metagraph<'a, T = RelayerHttp> {
    pub(crate) client: &'a RelayerClient<T>,
}

impl<'a, T: RpcTransport> Metagraph<'a, T> {
    /// Axons of all miners on the client's subnet.
    pub async fn get_miners<S: MessageSigner + ?Sized>(
        &self,
        signer: &S,
    ) -> Result<Vec<AxonInfo>, SdkError> {
        self.list(methods::GET_MINERS, signer).await
    }

    /// Axons of all validators on the client's subnet.
    pub async fn get_validators<S: MessageSigner + ?Sized>(
        &self,
        signer: &S,
    ) -> Result<Vec<AxonInfo>, SdkError> {
        self.list(methods::GET_VALIDATORS, signer).await
    }

    async fn list<S: MessageSigner + ?Sized>(
        &self,
        method: &str,
        signer: &S,
    ) -> Result<Vec<AxonInfo>, SdkError> {
        let id = self.client.next_call_id();
        let message = RelayerMessage::signed(self.client.context(), signer)?;
        self.client.dispatch(id, method, &message).await
    }
}
