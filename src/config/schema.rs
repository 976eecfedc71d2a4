//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file. Every
//! section has defaults so an empty file (or no file at all) yields the
//! observed Base deployment.

use alloy::primitives::{address, Address, Bytes, B256};
use serde::{Deserialize, Serialize};

/// Root configuration for the treasury operations.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OpsConfig {
    /// Target network.
    pub chain: ChainConfig,

    /// Contracts taking part in the flows.
    pub addresses: AddressConfig,

    /// Fee split copied into the signed authorization and the deposit call.
    pub fees: FeeConfig,

    /// Pre-encoded protocol call data.
    pub calldata: CalldataConfig,

    /// Settings for the role-gated executor.
    pub executor: ExecutorConfig,
}

/// Network settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Chain ID (8453 for Base mainnet).
    pub chain_id: u64,

    /// JSON-RPC endpoint URL.
    pub rpc_url: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: 8453,
            rpc_url: "https://mainnet.base.org".to_string(),
        }
    }
}

/// Fixed on-chain addresses.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AddressConfig {
    /// The safe whose funds are managed.
    pub safe: Address,

    /// Roles module gating what the operator may execute on behalf of the safe.
    pub roles: Address,

    /// Superform proxy owned by the safe.
    pub proxy: Address,

    /// Proxy factory the signer authorization is bound to. Must be set for deposits.
    pub proxy_factory: Address,
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            safe: address!("6c9f84a067D5B72834b74AFa328cd41F60C0326F"),
            roles: address!("8667Bf1978740Ccbd2642D2B832582e7a5c5e0C3"),
            proxy: address!("08AD407BD632e14f757a3957F3ee9390D8e6aa48"),
            proxy_factory: Address::ZERO,
        }
    }
}

/// Client fee split in basis points (10000 = 100%).
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct FeeConfig {
    pub client_bps_of_deposit: u16,
    pub client_bps_of_profit: u16,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            client_bps_of_deposit: 0,
            client_bps_of_profit: 9700,
        }
    }
}

/// Opaque call data produced upstream by ABI encoding.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CalldataConfig {
    /// Yield protocol deposit action.
    pub yield_protocol: Bytes,

    /// Superform withdraw/unwind action.
    pub superform: Bytes,
}

impl Default for CalldataConfig {
    fn default() -> Self {
        Self {
            yield_protocol: Bytes::from_static(&[0x42]),
            superform: Bytes::from_static(&[0x43]),
        }
    }
}

/// Role-gated executor settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Role key assigned to the operator in the roles module.
    pub role_key: B256,

    /// Block confirmations to wait for before a call counts as accepted.
    pub required_confirmations: u64,

    /// Maximum time to wait for a receipt, in seconds.
    pub confirmation_timeout_secs: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            role_key: B256::ZERO,
            required_confirmations: 1,
            confirmation_timeout_secs: 120,
        }
    }
}
