//! Executor that routes calls through the safe's roles module.
//!
//! Every operation becomes `execTransactionWithRole` on the roles module,
//! which checks the operator's role and then has the safe make the call.

use std::time::Duration;

use alloy::primitives::aliases::U48;
use alloy::primitives::{Address, Bytes, TxHash, B256, U256};
use alloy::providers::{PendingTransactionError, WatchTxError};
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::wallet::{Wallet, EXECUTOR_KEY_ENV_VAR};
use crate::config::{ConfigError, OpsConfig};
use crate::executor::types::{
    BatchClaimRequest, DepositRequest, ExecutionError, Executor, WithdrawRequest,
};

sol! {
    #[sol(rpc)]
    interface IRoles {
        function execTransactionWithRole(
            address to,
            uint256 value,
            bytes calldata data,
            uint8 operation,
            bytes32 roleKey,
            bool shouldRevert
        ) external returns (bool success);
    }

    interface IP2pSuperformProxyFactory {
        function deposit(
            bytes calldata yieldProtocolCalldata,
            uint48 clientBasisPointsOfDeposit,
            uint48 clientBasisPointsOfProfit,
            uint256 p2pSignerSigDeadline,
            bytes calldata p2pSignerSignature
        ) external;
    }

    interface IP2pSuperformProxy {
        function withdraw(bytes calldata superformCalldata) external;
        function batchClaim() external;
    }
}

/// Safe operation type for a plain call (as opposed to delegatecall).
const OPERATION_CALL: u8 = 0;

/// Role-gated executor backed by a signing RPC provider.
#[derive(Debug, Clone)]
pub struct RolesExecutor {
    client: BlockchainClient,
    proxy_factory: Address,
    role_key: B256,
    required_confirmations: u64,
    confirmation_timeout_secs: u64,
}

impl RolesExecutor {
    /// Create an executor submitting through `client`.
    pub fn new(client: BlockchainClient, config: &OpsConfig) -> Self {
        Self {
            client,
            proxy_factory: config.addresses.proxy_factory,
            role_key: config.executor.role_key,
            required_confirmations: config.executor.required_confirmations,
            confirmation_timeout_secs: config.executor.confirmation_timeout_secs,
        }
    }

    /// Build an executor whose operator key comes from `SAFE_EXECUTOR_PRIVATE_KEY`.
    pub fn from_env(config: &OpsConfig) -> Result<Self, ConfigError> {
        let wallet = Wallet::from_env(EXECUTOR_KEY_ENV_VAR, config.chain.chain_id)?;
        let client = BlockchainClient::connect(&config.chain, &wallet)?;
        Ok(Self::new(client, config))
    }

    /// Have the safe call `to` with `data` and wait for the receipt.
    async fn execute(
        &self,
        action: &'static str,
        safe: Address,
        roles: Address,
        to: Address,
        data: Bytes,
    ) -> Result<TxHash, ExecutionError> {
        tracing::debug!(action, safe = %safe, roles = %roles, target = %to, "Submitting role-gated call");

        let module = IRoles::new(roles, self.client.provider().clone());
        let pending = module
            .execTransactionWithRole(to, U256::ZERO, data, OPERATION_CALL, self.role_key, true)
            .send()
            .await
            .map_err(|e| ExecutionError::Reverted(e.to_string()))?;

        let tx_hash = *pending.tx_hash();
        tracing::debug!(action, tx_hash = %tx_hash, "Transaction broadcast");

        let receipt = pending
            .with_required_confirmations(self.required_confirmations)
            .with_timeout(Some(Duration::from_secs(self.confirmation_timeout_secs)))
            .get_receipt()
            .await
            .map_err(|e| match e {
                PendingTransactionError::TxWatcher(WatchTxError::Timeout) => {
                    ExecutionError::Timeout(self.confirmation_timeout_secs)
                }
                other => ExecutionError::Rpc(other.to_string()),
            })?;

        if !receipt.status() {
            return Err(ExecutionError::Reverted(format!(
                "{} transaction {} reverted",
                action, tx_hash
            )));
        }

        Ok(tx_hash)
    }
}

impl Executor for RolesExecutor {
    async fn deposit(&self, request: DepositRequest) -> Result<TxHash, ExecutionError> {
        let data = IP2pSuperformProxyFactory::depositCall {
            yieldProtocolCalldata: request.yield_protocol_calldata,
            clientBasisPointsOfDeposit: U48::from(request.client_bps_of_deposit),
            clientBasisPointsOfProfit: U48::from(request.client_bps_of_profit),
            p2pSignerSigDeadline: request.signer_sig_deadline,
            p2pSignerSignature: request.signer_signature,
        }
        .abi_encode();

        self.execute(
            "deposit",
            request.safe_address,
            request.roles_address,
            self.proxy_factory,
            data.into(),
        )
        .await
    }

    async fn withdraw(&self, request: WithdrawRequest) -> Result<TxHash, ExecutionError> {
        let data = IP2pSuperformProxy::withdrawCall {
            superformCalldata: request.superform_calldata,
        }
        .abi_encode();

        self.execute(
            "withdraw",
            request.safe_address,
            request.roles_address,
            request.proxy_address,
            data.into(),
        )
        .await
    }

    async fn batch_claim(&self, request: BatchClaimRequest) -> Result<TxHash, ExecutionError> {
        let data = IP2pSuperformProxy::batchClaimCall {}.abi_encode();

        self.execute(
            "batch_claim",
            request.safe_address,
            request.roles_address,
            request.proxy_address,
            data.into(),
        )
        .await
    }
}
