//! Audits sub-client: ask a miner to audit a contract.

use crate::auth::MessageSigner;
use crate::client::RelayerClient;
use crate::domain::audit::{AuditRequest, AuditTask, PerformAuditMessage, TaskModel};
use crate::domain::ResultModel;
use crate::error::SdkError;
use crate::http::{RelayerHttp, RpcTransport};
use crate::rpc::methods;

pub struct Audits<'a, T = RelayerHttp> {
    pub(crate) client: &'a RelayerClient<T>,
}

impl<'a, T: RpcTransport> Audits<'a, T> {
    /// Send `code` to miner `uid` for auditing. Both the task and the envelope
    /// are signed by `signer`.
    pub async fn perform_audit<S: MessageSigner + ?Sized>(
        &self,
        signer: &S,
        uid: u16,
        code: &str,
    ) -> Result<ResultModel, SdkError> {
        let id = self.client.next_call_id();
        let task = TaskModel::signed(
            AuditTask {
                uid,
                contract_code: code.to_string(),
            },
            signer,
        )?;
        let message = PerformAuditMessage::signed(
            AuditRequest {
                context: self.client.context(),
                task,
            },
            signer,
        )?;
        self.client
            .dispatch(id, methods::PERFORM_AUDIT, &message)
            .await
    }
}
