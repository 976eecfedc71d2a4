//! Blockchain RPC client.
//!
//! # Responsibilities
//! - Build a JSON-RPC provider for the configured endpoint
//! - Attach the operator wallet so role-gated calls are signed locally
//! - Keep the chain ID the provider was built for

use alloy::network::EthereumWallet;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};

use crate::blockchain::types::ChainId;
use crate::blockchain::wallet::Wallet;
use crate::config::{ChainConfig, ConfigError};
use crate::config::validation::ValidationError;

/// Signing RPC client for a single endpoint.
#[derive(Clone)]
pub struct BlockchainClient {
    provider: DynProvider,
    rpc_url: String,
    chain_id: ChainId,
}

impl BlockchainClient {
    /// Build a client that signs with `wallet`.
    ///
    /// No request is sent here; the first network call happens on the first
    /// transaction.
    pub fn connect(config: &ChainConfig, wallet: &Wallet) -> Result<Self, ConfigError> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            ConfigError::Validation(vec![ValidationError {
                field: "chain.rpc_url",
                message: format!("Invalid RPC URL '{}': {}", config.rpc_url, e),
            }])
        })?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(wallet.signer().clone()))
            .connect_http(url)
            .erased();

        tracing::info!(
            rpc_url = %config.rpc_url,
            chain_id = config.chain_id,
            sender = %wallet.address(),
            "Blockchain client initialized"
        );

        Ok(Self {
            provider,
            rpc_url: config.rpc_url.clone(),
            chain_id: ChainId(config.chain_id),
        })
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id)
            .finish()
    }
}
