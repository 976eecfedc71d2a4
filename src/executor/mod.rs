//! Executor subsystem: the boundary through which the flows reach the chain.
//!
//! The flows only see the [`Executor`] trait. [`RolesExecutor`] is the
//! production implementation; tests substitute stubs.

pub mod roles;
pub mod types;

pub use roles::RolesExecutor;
pub use types::{BatchClaimRequest, DepositRequest, ExecutionError, Executor, WithdrawRequest};
