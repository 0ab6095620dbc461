//! Registry sub-client: axon registration.

use crate::auth::MessageSigner;
use crate::client::RelayerClient;
use crate::domain::registration::{RegisterMessage, RegisterParams, Registration};
use crate::domain::ResultModel;
use crate::error::SdkError;
use crate::http::{RelayerHttp, RpcTransport};
use crate::rpc::methods;

pub struct Registry<'a, T = RelayerHttp> {
    pub(crate) client: &'a RelayerClient<T>,
}

impl<'a, T: RpcTransport> Registry<'a, T> {
    /// Register the signer's axon with the relayer.
    pub async fn register_axon<S: MessageSigner + ?Sized>(
        &self,
        signer: &S,
        params: RegisterParams,
    ) -> Result<ResultModel, SdkError> {
        let id = self.client.next_call_id();
        let message = RegisterMessage::signed(
            Registration {
                context: self.client.context(),
                params,
            },
            signer,
        )?;
        self.client.dispatch(id, methods::REGISTER, &message).await
    }
}
