//! Chain identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// EVM chain id scoping every ledger asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    /// BNB Smart Chain mainnet
    pub const BSC_MAINNET: ChainId = ChainId(56);
    /// BNB Smart Chain testnet
    pub const BSC_TESTNET: ChainId = ChainId(97);

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
