//! Executor request types, errors and the executor trait.

use std::future::Future;

use alloy::primitives::{Address, Bytes, TxHash, U256};
use thiserror::Error;

/// Errors surfaced by an executor call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecutionError {
    /// The call reverted, or was rejected before broadcast.
    #[error("Transaction reverted: {0}")]
    Reverted(String),

    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// No receipt within the configured time.
    #[error("Transaction not confirmed after {0} seconds")]
    Timeout(u64),
}

impl ExecutionError {
    /// Free-text message reported by the executor.
    pub fn message(&self) -> &str {
        match self {
            ExecutionError::Reverted(msg) | ExecutionError::Rpc(msg) => msg,
            ExecutionError::Timeout(_) => "confirmation timeout",
        }
    }
}

/// Deposit through the proxy factory, authorized by the signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositRequest {
    pub safe_address: Address,
    pub roles_address: Address,
    pub yield_protocol_calldata: Bytes,
    pub client_bps_of_deposit: u16,
    pub client_bps_of_profit: u16,
    pub signer_sig_deadline: U256,
    pub signer_signature: Bytes,
}

/// Withdraw/unwind through the safe's proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawRequest {
    pub safe_address: Address,
    pub roles_address: Address,
    pub proxy_address: Address,
    pub superform_calldata: Bytes,
}

/// Claim all accrued rewards held by the safe's proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchClaimRequest {
    pub safe_address: Address,
    pub roles_address: Address,
    pub proxy_address: Address,
}

/// Submits role-gated transactions on behalf of the safe.
///
/// Each call resolves once the transaction is accepted and yields its hash.
pub trait Executor {
    fn deposit(
        &self,
        request: DepositRequest,
    ) -> impl Future<Output = Result<TxHash, ExecutionError>> + Send;

    fn withdraw(
        &self,
        request: WithdrawRequest,
    ) -> impl Future<Output = Result<TxHash, ExecutionError>> + Send;

    fn batch_claim(
        &self,
        request: BatchClaimRequest,
    ) -> impl Future<Output = Result<TxHash, ExecutionError>> + Send;
}
