//! Canonical encoding of the signer authorization.
//!
//! The proxy factory re-derives the same hash on-chain to check the signer,
//! so field order and widths below are part of the contract ABI.

use alloy::primitives::aliases::U48;
use alloy::primitives::{keccak256, Address, B256, U256};
use alloy::sol;
use alloy::sol_types::SolValue;

use crate::blockchain::types::ChainId;

sol! {
    /// On-chain layout of the signed authorization:
    /// `abi.encode(address,uint48,uint48,uint256,address,uint256)`.
    struct SignerAuthorization {
        address client;
        uint48 clientBasisPointsOfDeposit;
        uint48 clientBasisPointsOfProfit;
        uint256 p2pSignerSigDeadline;
        address p2pSuperformProxyFactory;
        uint256 chainId;
    }
}

/// Every field is a single ABI word.
pub const ENCODED_LEN: usize = 6 * 32;

/// A time-boxed fee-split authorization for one safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizationPayload {
    pub safe_address: Address,
    pub client_bps_of_deposit: u16,
    pub client_bps_of_profit: u16,
    /// Unix timestamp after which the authorization is rejected.
    pub deadline: U256,
    pub proxy_factory_address: Address,
    pub chain_id: ChainId,
}

impl AuthorizationPayload {
    fn to_sol(self) -> SignerAuthorization {
        SignerAuthorization {
            client: self.safe_address,
            clientBasisPointsOfDeposit: U48::from(self.client_bps_of_deposit),
            clientBasisPointsOfProfit: U48::from(self.client_bps_of_profit),
            p2pSignerSigDeadline: self.deadline,
            p2pSuperformProxyFactory: self.proxy_factory_address,
            chainId: self.chain_id.into(),
        }
    }

    /// ABI-encode the payload. Always [`ENCODED_LEN`] bytes.
    pub fn encode(&self) -> Vec<u8> {
        self.to_sol().abi_encode()
    }

    /// Keccak-256 of the encoding.
    pub fn hash(&self) -> B256 {
        keccak256(self.encode())
    }
}
