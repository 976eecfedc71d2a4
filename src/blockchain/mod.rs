//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (private keys, RPC URL)
//!     → wallet.rs (key loading, hashing/signing)
//!     → client.rs (signing RPC provider for the executor)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data

pub mod client;
pub mod types;
pub mod wallet;

pub use client::BlockchainClient;
pub use types::ChainId;
pub use wallet::Wallet;
