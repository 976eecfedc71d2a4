//! Treasury automation for a Safe managed through a roles module.
//!
//! # Architecture Overview
//!
//! ```text
//!   env / .env / TOML ──▶ config ──▶ OpsConfig ─────────────┐
//!                                                           ▼
//!   P2P_SIGNER_PRIVATE_KEY ──▶ blockchain::Wallet ──▶ authorization ──▶ operations
//!                                                    (encode, hash,      │
//!                                                     sign)              ▼
//!                                                                 executor::Executor
//!                                                                 (roles module → safe
//!                                                                  → proxy / factory)
//! ```
//!
//! Two binaries drive the library: `deposit-withdraw` and `batch-claim`.

pub mod authorization;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod executor;
pub mod lifecycle;
pub mod observability;
pub mod operations;

pub use config::OpsConfig;
pub use error::{OpsError, OpsResult};
pub use executor::{Executor, RolesExecutor};
