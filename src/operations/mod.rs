//! Treasury operations.
//!
//! Two independent flows, each run once per process:
//! - `deposit_withdraw.rs` signs an authorization, deposits, then withdraws
//! - `batch_claim.rs` claims rewards, treating "nothing to claim" as success
//!
//! Calls are awaited one after another; no step is retried.

pub mod batch_claim;
pub mod deposit_withdraw;

pub use batch_claim::{is_benign_empty_claim, BatchClaimFlow, BatchClaimOutcome};
pub use deposit_withdraw::{DepositWithdrawFlow, DepositWithdrawOutcome};
