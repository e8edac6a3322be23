//! Api - the RPC facade
//!
//! Each endpoint comes in two methods: `*_with` reports through a callback,
//! the plain name is `async`. Both build the command from
//! [`templates`](crate::templates), which is also available directly.

use std::sync::Arc;

use sol_layout::BufferLayout;
use sol_primitives::{Address, Epoch, Lamports, Slot, UnixTimestamp};

use crate::account::AccountInfo;
use crate::command::Command;
use crate::config::ClientConfig;
use crate::templates::{self, LeaderSchedule};
use crate::transport::{MockTransport, Transport};
use crate::types::{Commitment, EpochInfo};
use crate::SdkError;

#[cfg(feature = "http")]
use crate::transport::HttpTransport;

/// RPC client facade.
///
/// Cheap to clone; clones share the transport. Callback methods spawn onto
/// the current Tokio runtime; outside one the callback receives
/// [`SdkError::NoRuntime`].
#[derive(Clone)]
pub struct Api {
    transport: Arc<dyn Transport>,
    config: Arc<ClientConfig>,
}

impl Api {
    /// Create a client with HTTP transport
    #[cfg(feature = "http")]
    pub fn connect(config: ClientConfig) -> Result<Self, SdkError> {
        let transport = match config.timeout() {
            Some(timeout) => HttpTransport::with_timeout(&config.rpc_url, timeout)?,
            None => HttpTransport::new(&config.rpc_url),
        };
        Ok(Self::with_config(transport, config))
    }

    /// Create a client with mock transport (for testing)
    pub fn new_mock() -> Self {
        Self::with_transport(MockTransport::new())
    }

    /// Create a client with a custom transport
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    /// Create a client with a custom transport and configuration
    pub fn with_config(transport: impl Transport + 'static, config: ClientConfig) -> Self {
        Self::with_shared_transport(Arc::new(transport), config)
    }

    /// Create a client over a transport shared with other clients
    pub fn with_shared_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ==================== Command Execution ====================

    /// Dispatch `command` and report its single result through `on_complete`.
    ///
    /// All three calling conventions end up here.
    pub fn perform<T, F>(&self, command: &Command<T>, on_complete: F)
    where
        T: Send + 'static,
        F: FnOnce(Result<T, SdkError>) + Send + 'static,
    {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                let method = command.method();
                tracing::debug!(method, "no tokio runtime for rpc call");
                on_complete(Err(SdkError::NoRuntime { method }));
                return;
            }
        };
        let command = command.clone();
        let transport = Arc::clone(&self.transport);
        let params = command.params().encode_with(self.config.commitment);

        runtime.spawn(async move {
            let method = command.method();
            let result = match params {
                Ok(params) => {
                    tracing::debug!(method, params = params.len(), "dispatching rpc request");
                    match transport.request_json(method, params).await {
                        Ok(raw) => command.resolve(raw),
                        Err(e) => Err(e),
                    }
                }
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                tracing::debug!(method, error = %e, "rpc call failed");
            }
            on_complete(result);
        });
    }

    /// Dispatch `command` and wait for its result
    pub async fn execute<T: Send + 'static>(&self, command: &Command<T>) -> Result<T, SdkError> {
        command.execute(self).await
    }

    /// Run every command concurrently; results keep input order
    pub async fn execute_all<T: Send + 'static>(
        &self,
        commands: &[Command<T>],
    ) -> Vec<Result<T, SdkError>> {
        futures::future::join_all(commands.iter().map(|command| command.execute(self))).await
    }

    // ==================== Account Queries ====================

    /// Get an account with its data decoded into `T`; fails with
    /// `MissingValue` if the account does not exist
    pub fn get_account_info_with<T, F>(&self, account: &Address, on_complete: F)
    where
        T: BufferLayout + Send + 'static,
        F: FnOnce(Result<AccountInfo<T>, SdkError>) + Send + 'static,
    {
        templates::get_account_info::<T>(account).perform(self, on_complete)
    }

    /// Get an account with its data decoded into `T`; fails with
    /// `MissingValue` if the account does not exist
    pub async fn get_account_info<T>(&self, account: &Address) -> Result<AccountInfo<T>, SdkError>
    where
        T: BufferLayout + Send + 'static,
    {
        templates::get_account_info::<T>(account).execute(self).await
    }

    /// Get an account that may be unfunded; `allow_unfunded_recipient`
    /// turns a missing account into `Ok(None)`
    pub fn get_optional_account_info_with<T, F>(
        &self,
        account: &Address,
        allow_unfunded_recipient: bool,
        on_complete: F,
    ) where
        T: BufferLayout + Send + 'static,
        F: FnOnce(Result<Option<AccountInfo<T>>, SdkError>) + Send + 'static,
    {
        templates::get_optional_account_info::<T>(account, allow_unfunded_recipient)
            .perform(self, on_complete)
    }

    /// Get an account that may be unfunded; `allow_unfunded_recipient`
    /// turns a missing account into `Ok(None)`
    pub async fn get_optional_account_info<T>(
        &self,
        account: &Address,
        allow_unfunded_recipient: bool,
    ) -> Result<Option<AccountInfo<T>>, SdkError>
    where
        T: BufferLayout + Send + 'static,
    {
        templates::get_optional_account_info::<T>(account, allow_unfunded_recipient)
            .execute(self)
            .await
    }

    /// Get several accounts at once
    pub fn get_multiple_accounts_with<T, F>(&self, accounts: &[Address], on_complete: F)
    where
        T: BufferLayout + Send + 'static,
        F: FnOnce(Result<Vec<Option<AccountInfo<T>>>, SdkError>) + Send + 'static,
    {
        templates::get_multiple_accounts::<T>(accounts).perform(self, on_complete)
    }

    /// Get several accounts at once
    pub async fn get_multiple_accounts<T>(
        &self,
        accounts: &[Address],
    ) -> Result<Vec<Option<AccountInfo<T>>>, SdkError>
    where
        T: BufferLayout + Send + 'static,
    {
        templates::get_multiple_accounts::<T>(accounts).execute(self).await
    }

    /// Get the balance of an account
    pub fn get_balance_with<F>(
        &self,
        account: &Address,
        commitment: Option<Commitment>,
        on_complete: F,
    ) where
        F: FnOnce(Result<Lamports, SdkError>) + Send + 'static,
    {
        templates::get_balance(account, commitment).perform(self, on_complete)
    }

    /// Get the balance of an account
    pub async fn get_balance(
        &self,
        account: &Address,
        commitment: Option<Commitment>,
    ) -> Result<Lamports, SdkError> {
        templates::get_balance(account, commitment).execute(self).await
    }

    // ==================== Slot & Epoch Queries ====================

    /// Get the production time of a block; `None` if not recorded
    pub fn get_block_time_with<F>(&self, slot: Slot, on_complete: F)
    where
        F: FnOnce(Result<Option<UnixTimestamp>, SdkError>) + Send + 'static,
    {
        templates::get_block_time(slot).perform(self, on_complete)
    }

    /// Get the production time of a block; `None` if not recorded
    pub async fn get_block_time(&self, slot: Slot) -> Result<Option<UnixTimestamp>, SdkError> {
        templates::get_block_time(slot).execute(self).await
    }

    /// Get information about the current epoch
    pub fn get_epoch_info_with<F>(&self, commitment: Option<Commitment>, on_complete: F)
    where
        F: FnOnce(Result<EpochInfo, SdkError>) + Send + 'static,
    {
        templates::get_epoch_info(commitment).perform(self, on_complete)
    }

    /// Get information about the current epoch
    pub async fn get_epoch_info(
        &self,
        commitment: Option<Commitment>,
    ) -> Result<EpochInfo, SdkError> {
        templates::get_epoch_info(commitment).execute(self).await
    }

    /// Get the current slot
    pub fn get_slot_with<F>(&self, commitment: Option<Commitment>, on_complete: F)
    where
        F: FnOnce(Result<Slot, SdkError>) + Send + 'static,
    {
        templates::get_slot(commitment).perform(self, on_complete)
    }

    /// Get the current slot
    pub async fn get_slot(&self, commitment: Option<Commitment>) -> Result<Slot, SdkError> {
        templates::get_slot(commitment).execute(self).await
    }

    /// Get the current slot leader
    pub fn get_slot_leader_with<F>(&self, commitment: Option<Commitment>, on_complete: F)
    where
        F: FnOnce(Result<Address, SdkError>) + Send + 'static,
    {
        templates::get_slot_leader(commitment).perform(self, on_complete)
    }

    /// Get the current slot leader
    pub async fn get_slot_leader(
        &self,
        commitment: Option<Commitment>,
    ) -> Result<Address, SdkError> {
        templates::get_slot_leader(commitment).execute(self).await
    }

    // ==================== Block Queries ====================

    /// Get up to `limit` confirmed blocks starting at `start_slot`
    pub fn get_confirmed_blocks_with_limit_with<F>(
        &self,
        start_slot: Slot,
        limit: u64,
        on_complete: F,
    ) where
        F: FnOnce(Result<Vec<Slot>, SdkError>) + Send + 'static,
    {
        templates::get_confirmed_blocks_with_limit(start_slot, limit).perform(self, on_complete)
    }

    /// Get up to `limit` confirmed blocks starting at `start_slot`
    pub async fn get_confirmed_blocks_with_limit(
        &self,
        start_slot: Slot,
        limit: u64,
    ) -> Result<Vec<Slot>, SdkError> {
        templates::get_confirmed_blocks_with_limit(start_slot, limit)
            .execute(self)
            .await
    }

    /// Get the leader schedule for an epoch (current when `None`)
    pub fn get_leader_schedule_with<F>(
        &self,
        epoch: Option<Epoch>,
        commitment: Option<Commitment>,
        on_complete: F,
    ) where
        F: FnOnce(Result<Option<LeaderSchedule>, SdkError>) + Send + 'static,
    {
        templates::get_leader_schedule(epoch, commitment).perform(self, on_complete)
    }

    /// Get the leader schedule for an epoch (current when `None`)
    pub async fn get_leader_schedule(
        &self,
        epoch: Option<Epoch>,
        commitment: Option<Commitment>,
    ) -> Result<Option<LeaderSchedule>, SdkError> {
        templates::get_leader_schedule(epoch, commitment)
            .execute(self)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_api_mock_slot() {
        let api = Api::new_mock();
        assert_eq!(api.get_slot(None).await.unwrap(), 256);
    }

    #[tokio::test]
    async fn test_api_mock_balance() {
        let api = Api::new_mock();
        let balance = api.get_balance(&Address::new("Addr1"), None).await.unwrap();
        assert_eq!(balance, 1_000_000_000); // 1 SOL
    }

    #[tokio::test]
    async fn test_callback_convention() {
        let api = Api::new_mock();
        let (tx, rx) = oneshot::channel();
        api.get_epoch_info_with(None, move |result| {
            let _ = tx.send(result);
        });
        let info = rx.await.unwrap().unwrap();
        assert_eq!(info.slots_in_epoch, 432000);
    }

    #[tokio::test]
    async fn test_default_commitment_applied() {
        let transport = MockTransport::new();
        let api = Api::with_config(
            transport.clone(),
            ClientConfig::default().with_commitment(Commitment::Confirmed),
        );
        api.get_slot(None).await.unwrap();
        api.get_slot(Some(Commitment::Processed)).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].params, vec![json!({"commitment": "confirmed"})]);
        assert_eq!(requests[1].params, vec![json!({"commitment": "processed"})]);
    }

    #[tokio::test]
    async fn test_clones_share_transport() {
        let transport = MockTransport::new();
        let api = Api::with_transport(transport.clone());
        let other = api.clone();
        api.get_slot(None).await.unwrap();
        other.get_slot(None).await.unwrap();
        assert_eq!(transport.requests().len(), 2);
    }
}
