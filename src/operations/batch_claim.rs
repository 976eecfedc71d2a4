//! Batch claim of accrued rewards.
//!
//! `Start → ClaimAttempted → {Done | SkippedNoRewards}`

use alloy::primitives::TxHash;

use crate::config::OpsConfig;
use crate::error::OpsResult;
use crate::executor::{BatchClaimRequest, ExecutionError, Executor};

/// Lowercase fragment the executor reports when nothing has accrued.
const NO_CLAIMABLE_REWARDS: &str = "no claimable rewards";

/// Result of a batch claim that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchClaimOutcome {
    Claimed(TxHash),
    SkippedNoRewards,
}

/// Whether `error` only says there was nothing to claim.
///
/// Matches on the executor's free-text message, case-insensitively. A change
/// in the executor's wording turns the skip into a failure.
pub fn is_benign_empty_claim(error: &ExecutionError) -> bool {
    error.message().to_lowercase().contains(NO_CLAIMABLE_REWARDS)
}

/// Claims every reward held by the safe's proxy.
#[derive(Debug)]
pub struct BatchClaimFlow<E> {
    config: OpsConfig,
    executor: E,
}

impl<E: Executor> BatchClaimFlow<E> {
    pub fn new(config: OpsConfig, executor: E) -> Self {
        Self { config, executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub async fn run(&self) -> OpsResult<BatchClaimOutcome> {
        let addresses = &self.config.addresses;

        tracing::info!(proxy = %addresses.proxy, "Starting batch claim...");
        let result = self
            .executor
            .batch_claim(BatchClaimRequest {
                safe_address: addresses.safe,
                roles_address: addresses.roles,
                proxy_address: addresses.proxy,
            })
            .await;

        match result {
            Ok(tx_hash) => {
                tracing::info!(tx_hash = %tx_hash, "Batch claim tx hash");
                Ok(BatchClaimOutcome::Claimed(tx_hash))
            }
            Err(e) if is_benign_empty_claim(&e) => {
                tracing::info!(
                    proxy = %addresses.proxy,
                    "No claimable rewards for this proxy; skipping batch claim."
                );
                Ok(BatchClaimOutcome::SkippedNoRewards)
            }
            Err(e) => Err(e.into()),
        }
    }
}
