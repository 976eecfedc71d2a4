//! Chain-specific types.

use alloy::primitives::U256;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl From<ChainId> for U256 {
    fn from(id: ChainId) -> Self {
        U256::from(id.0)
    }
}
