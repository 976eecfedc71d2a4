//! Deposit followed by withdraw.
//!
//! `Start → SignedAuthorizationReady → DepositSubmitted → WithdrawSubmitted → Done`
//!
//! Withdraw is only issued once the deposit transaction has been accepted.
//! Any failure ends the flow; nothing is rolled back.

use alloy::primitives::{TxHash, U256};

use crate::authorization::{deadline_from, sign_authorization, unix_now, AuthorizationPayload};
use crate::blockchain::types::ChainId;
use crate::blockchain::wallet::{Wallet, SIGNER_KEY_ENV_VAR};
use crate::config::OpsConfig;
use crate::error::OpsResult;
use crate::executor::{DepositRequest, Executor, WithdrawRequest};

/// Transactions produced by a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositWithdrawOutcome {
    /// Deadline embedded in the signed authorization.
    pub deadline: U256,
    pub deposit_tx: TxHash,
    pub withdraw_tx: TxHash,
}

/// Signs a deposit authorization, deposits, then withdraws.
#[derive(Debug)]
pub struct DepositWithdrawFlow<E> {
    config: OpsConfig,
    executor: E,
}

impl<E: Executor> DepositWithdrawFlow<E> {
    pub fn new(config: OpsConfig, executor: E) -> Self {
        Self { config, executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Run with the signer key from the environment and the current time.
    pub async fn run(&self) -> OpsResult<DepositWithdrawOutcome> {
        self.run_with(|name| std::env::var(name).ok(), unix_now()).await
    }

    /// Run with an injected secret lookup and clock reading.
    pub async fn run_with<F>(&self, lookup: F, now: u64) -> OpsResult<DepositWithdrawOutcome>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = &self.config;
        let addresses = &config.addresses;

        // Fail before anything reaches the executor.
        let signer = Wallet::from_lookup(SIGNER_KEY_ENV_VAR, config.chain.chain_id, lookup)?;

        let deadline = deadline_from(now);
        let authorization = sign_authorization(
            &signer,
            AuthorizationPayload {
                safe_address: addresses.safe,
                client_bps_of_deposit: config.fees.client_bps_of_deposit,
                client_bps_of_profit: config.fees.client_bps_of_profit,
                deadline,
                proxy_factory_address: addresses.proxy_factory,
                chain_id: ChainId(config.chain.chain_id),
            },
        )
        .await?;

        tracing::info!(safe = %addresses.safe, deadline = %deadline, "Starting deposit...");
        let deposit_tx = self
            .executor
            .deposit(DepositRequest {
                safe_address: addresses.safe,
                roles_address: addresses.roles,
                yield_protocol_calldata: config.calldata.yield_protocol.clone(),
                client_bps_of_deposit: config.fees.client_bps_of_deposit,
                client_bps_of_profit: config.fees.client_bps_of_profit,
                signer_sig_deadline: deadline,
                signer_signature: authorization.signature_bytes(),
            })
            .await?;
        tracing::info!(tx_hash = %deposit_tx, "Deposit tx hash");

        tracing::info!(proxy = %addresses.proxy, "Starting withdraw...");
        let withdraw_tx = self
            .executor
            .withdraw(WithdrawRequest {
                safe_address: addresses.safe,
                roles_address: addresses.roles,
                proxy_address: addresses.proxy,
                superform_calldata: config.calldata.superform.clone(),
            })
            .await?;
        tracing::info!(tx_hash = %withdraw_tx, "Withdraw tx hash");

        Ok(DepositWithdrawOutcome {
            deadline,
            deposit_tx,
            withdraw_tx,
        })
    }
}
