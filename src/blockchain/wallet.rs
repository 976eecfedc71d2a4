//! Signing keys loaded from the environment.
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables
//! - Keys are never logged or serialized; only the derived address is

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::{Signature, Signer};

use crate::config::ConfigError;
use crate::error::{OpsError, OpsResult};

/// Environment variable holding the authorization signer key.
pub const SIGNER_KEY_ENV_VAR: &str = "P2P_SIGNER_PRIVATE_KEY";

/// Environment variable holding the key that submits role-gated transactions.
pub const EXECUTOR_KEY_ENV_VAR: &str = "SAFE_EXECUTOR_PRIVATE_KEY";

/// A local private key bound to a chain.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Create a wallet from a `0x`-prefixed, 32-byte hex private key.
    ///
    /// `var` names the source of the key and only appears in errors.
    pub fn from_private_key(
        var: &'static str,
        private_key_hex: &str,
        chain_id: u64,
    ) -> Result<Self, ConfigError> {
        let key_hex = private_key_hex
            .strip_prefix("0x")
            .ok_or(ConfigError::MalformedSecret(var))?;

        if key_hex.len() != 64 || !key_hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::MalformedSecret(var));
        }

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|_| ConfigError::MalformedSecret(var))?;
        let signer = signer.with_chain_id(Some(chain_id));

        tracing::info!(
            key = var,
            address = %signer.address(),
            chain_id = chain_id,
            "Signing key loaded"
        );

        Ok(Self { signer })
    }

    /// Resolve a key through `lookup`, failing fast when it is absent.
    pub fn from_lookup<F>(var: &'static str, chain_id: u64, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = lookup(var)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingSecret(var))?;

        Self::from_private_key(var, value.trim(), chain_id)
    }

    /// Load a key from the process environment.
    pub fn from_env(var: &'static str, chain_id: u64) -> Result<Self, ConfigError> {
        Self::from_lookup(var, chain_id, |name| std::env::var(name).ok())
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the underlying signer, for transaction signing by a provider.
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }

    /// Sign arbitrary message bytes (with Ethereum prefix).
    pub async fn sign_message(&self, message: &[u8]) -> OpsResult<Signature> {
        self.signer
            .sign_message(message)
            .await
            .map_err(|e| OpsError::Signing(format!("Message signing failed: {}", e)))
    }
}
