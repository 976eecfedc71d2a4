//! Signing of authorization payloads.

use std::time::{SystemTime, UNIX_EPOCH};

use alloy::primitives::{Bytes, B256, U256};
use alloy::signers::Signature;

use crate::authorization::payload::AuthorizationPayload;
use crate::blockchain::wallet::Wallet;
use crate::error::OpsResult;

/// How long a signed authorization stays usable on-chain.
pub const AUTHORIZATION_VALIDITY_SECS: u64 = 7 * 24 * 60 * 60;

/// A payload together with the signer's signature over its hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedAuthorization {
    pub payload: AuthorizationPayload,
    /// The hash that was signed.
    pub hash: B256,
    pub signature: Signature,
}

impl SignedAuthorization {
    /// The 65-byte `r || s || v` form passed to the executor.
    pub fn signature_bytes(&self) -> Bytes {
        Bytes::from(self.signature.as_bytes().to_vec())
    }
}

/// Current Unix time in seconds.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Deadline for an authorization issued at `now`.
pub fn deadline_from(now: u64) -> U256 {
    U256::from(now) + U256::from(AUTHORIZATION_VALIDITY_SECS)
}

/// Sign `payload` with `wallet`.
///
/// The 32 hash bytes are signed as an Ethereum signed message
/// (`"\x19Ethereum Signed Message:\n32" || hash`), which is what the proxy
/// factory recovers against. No clock is read here.
pub async fn sign_authorization(
    wallet: &Wallet,
    payload: AuthorizationPayload,
) -> OpsResult<SignedAuthorization> {
    let hash = payload.hash();
    let signature = wallet.sign_message(hash.as_slice()).await?;

    tracing::debug!(
        signer = %wallet.address(),
        hash = %hash,
        deadline = %payload.deadline,
        "Authorization signed"
    );

    Ok(SignedAuthorization {
        payload,
        hash,
        signature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::types::ChainId;
    use crate::blockchain::wallet::SIGNER_KEY_ENV_VAR;
    use alloy::primitives::{address, eip191_hash_message};

    // Anvil's well-known test accounts #0 and #1; never use for real funds
    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const OTHER_KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    fn test_wallet(key: &str) -> Wallet {
        Wallet::from_private_key(SIGNER_KEY_ENV_VAR, key, 8453).expect("Failed to create test wallet")
    }

    fn payload(deadline: U256) -> AuthorizationPayload {
        AuthorizationPayload {
            safe_address: address!("6c9f84a067D5B72834b74AFa328cd41F60C0326F"),
            client_bps_of_deposit: 0,
            client_bps_of_profit: 9700,
            deadline,
            proxy_factory_address: address!("1111111111111111111111111111111111111111"),
            chain_id: ChainId(8453),
        }
    }

    #[test]
    fn test_deadline_is_one_week_out() {
        assert_eq!(deadline_from(1_700_000_000), U256::from(1_700_604_800u64));
        assert_eq!(deadline_from(0), U256::from(604_800u64));
    }

    #[tokio::test]
    async fn test_signature_is_deterministic() {
        let wallet = test_wallet(TEST_KEY);
        let deadline = deadline_from(1_700_000_000);

        let first = sign_authorization(&wallet, payload(deadline)).await.unwrap();
        let second = sign_authorization(&wallet, payload(deadline)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.signature_bytes(), second.signature_bytes());
        assert_eq!(first.signature_bytes().len(), 65);
    }

    #[tokio::test]
    async fn test_signature_recovers_to_signer() {
        let wallet = test_wallet(TEST_KEY);
        let signed = sign_authorization(&wallet, payload(deadline_from(1_700_000_000)))
            .await
            .unwrap();

        assert_eq!(signed.hash, signed.payload.hash());
        let recovered = signed
            .signature
            .recover_address_from_prehash(&eip191_hash_message(signed.hash))
            .unwrap();
        assert_eq!(recovered, wallet.address());
    }

    #[tokio::test]
    async fn test_changed_deadline_changes_signature() {
        let wallet = test_wallet(TEST_KEY);
        let a = sign_authorization(&wallet, payload(deadline_from(1_700_000_000))).await.unwrap();
        let b = sign_authorization(&wallet, payload(deadline_from(1_700_000_001))).await.unwrap();
        assert_ne!(a.hash, b.hash);
        assert_ne!(a.signature, b.signature);
    }

    #[tokio::test]
    async fn test_different_keys_sign_differently() {
        let deadline = deadline_from(1_700_000_000);
        let a = sign_authorization(&test_wallet(TEST_KEY), payload(deadline)).await.unwrap();
        let b = sign_authorization(&test_wallet(OTHER_KEY), payload(deadline)).await.unwrap();
        assert_eq!(a.hash, b.hash);
        assert_ne!(a.signature, b.signature);
    }
}
