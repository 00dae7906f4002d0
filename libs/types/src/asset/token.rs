//! Fungible asset identities
//!
//! An [`Asset`] is either the chain's native unit or a ledger-tracked
//! [`Token`] identified by `(chain_id, address)`. Only tokens take part in
//! canonical pair ordering.

use super::address::Address;
use super::chain::ChainId;
use crate::common::AssetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Ledger-tracked asset identified by chain and contract address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub chain_id: ChainId,
    pub address: Address,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl Token {
    pub fn new(
        chain_id: ChainId,
        address: Address,
        decimals: u8,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.map(str::to_string),
            name: name.map(str::to_string),
        }
    }

    /// Build from a hex address string in any letter case
    pub fn parse(
        chain_id: ChainId,
        address: &str,
        decimals: u8,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, AssetError> {
        Ok(Self::new(chain_id, address.parse()?, decimals, symbol, name))
    }

    /// Canonical ordering rule for pairs.
    ///
    /// Only defined between distinct tokens on the same chain; compares
    /// lower-cased addresses lexicographically.
    pub fn sorts_before(&self, other: &Token) -> Result<bool, AssetError> {
        if self.chain_id != other.chain_id {
            return Err(AssetError::ChainMismatch {
                left: self.chain_id,
                right: other.chain_id,
            });
        }
        if self.address == other.address {
            return Err(AssetError::DuplicateAsset {
                address: self.address.to_checksum(),
            });
        }
        Ok(self.address < other.address)
    }

    /// `(self, other)` reordered so the first sorts before the second
    pub fn sort_pair<'a>(&'a self, other: &'a Token) -> Result<(&'a Token, &'a Token), AssetError> {
        if self.sorts_before(other)? {
            Ok((self, other))
        } else {
            Ok((other, self))
        }
    }

    pub fn label(&self) -> String {
        self.symbol
            .clone()
            .unwrap_or_else(|| self.address.to_checksum())
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (self.chain_id == other.chain_id && self.address == other.address)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}:{})", self.label(), self.chain_id, self.address)
    }
}

/// The chain's native unit; one per chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NativeAsset {
    pub chain_id: ChainId,
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
}

impl NativeAsset {
    pub fn new(chain_id: ChainId, symbol: &str, name: &str) -> Self {
        Self {
            chain_id,
            decimals: 18,
            symbol: symbol.to_string(),
            name: name.to_string(),
        }
    }

    /// BNB on BNB Smart Chain networks
    pub fn bnb(chain_id: ChainId) -> Self {
        Self::new(chain_id, "BNB", "BNB")
    }
}

impl PartialEq for NativeAsset {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id
    }
}

impl Eq for NativeAsset {}

impl Hash for NativeAsset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
    }
}

/// Any fungible unit an amount can be denominated in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Asset {
    Native(NativeAsset),
    Ledger(Token),
}

impl Asset {
    pub fn decimals(&self) -> u8 {
        match self {
            Asset::Native(native) => native.decimals,
            Asset::Ledger(token) => token.decimals,
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            Asset::Native(native) => Some(native.symbol.as_str()),
            Asset::Ledger(token) => token.symbol.as_deref(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Asset::Native(native) => Some(native.name.as_str()),
            Asset::Ledger(token) => token.name.as_deref(),
        }
    }

    pub fn chain_id(&self) -> ChainId {
        match self {
            Asset::Native(native) => native.chain_id,
            Asset::Ledger(token) => token.chain_id,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Asset::Native(_))
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Asset::Ledger(token) => Some(token),
            Asset::Native(_) => None,
        }
    }

    /// Ledger token this asset trades as: itself, or the chain's wrapped
    /// native token.
    pub fn wrapped(&self, wrapped_native: &Token) -> Result<Token, AssetError> {
        match self {
            Asset::Ledger(token) => Ok(token.clone()),
            Asset::Native(native) if native.chain_id == wrapped_native.chain_id => {
                Ok(wrapped_native.clone())
            }
            Asset::Native(native) => Err(AssetError::ChainMismatch {
                left: native.chain_id,
                right: wrapped_native.chain_id,
            }),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Asset::Native(native) => native.symbol.clone(),
            Asset::Ledger(token) => token.label(),
        }
    }
}

impl From<Token> for Asset {
    fn from(token: Token) -> Self {
        Asset::Ledger(token)
    }
}

impl From<NativeAsset> for Asset {
    fn from(native: NativeAsset) -> Self {
        Asset::Native(native)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Native(native) => write!(f, "{}({})", native.symbol, native.chain_id),
            Asset::Ledger(token) => fmt::Display::fmt(token, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(chain: u64, address: &str) -> Token {
        Token::parse(ChainId(chain), address, 18, None, None).unwrap()
    }

    const A: &str = "0x0000000000000000000000000000000000000001";
    const B: &str = "0x0000000000000000000000000000000000000002";

    #[test]
    fn test_equality_ignores_metadata() {
        let plain = token(56, A);
        let named = Token::parse(ChainId(56), A, 6, Some("USDT"), Some("Tether")).unwrap();
        assert_eq!(plain, named);
        assert_ne!(plain, token(97, A));
    }

    #[test]
    fn test_sorts_before() {
        assert!(token(56, A).sorts_before(&token(56, B)).unwrap());
        assert!(!token(56, B).sorts_before(&token(56, A)).unwrap());
    }

    #[test]
    fn test_sorts_before_rejects_chain_mismatch() {
        assert!(matches!(
            token(56, A).sorts_before(&token(97, B)),
            Err(AssetError::ChainMismatch { .. })
        ));
    }

    #[test]
    fn test_sorts_before_rejects_self() {
        let t = token(56, A);
        assert!(matches!(
            t.sorts_before(&t),
            Err(AssetError::DuplicateAsset { .. })
        ));
    }

    #[test]
    fn test_native_compared_by_chain() {
        assert_eq!(
            Asset::from(NativeAsset::bnb(ChainId(56))),
            Asset::from(NativeAsset::new(ChainId(56), "BNB", "Binance Coin"))
        );
        assert_ne!(
            Asset::from(NativeAsset::bnb(ChainId(56))),
            Asset::from(NativeAsset::bnb(ChainId(97)))
        );
        assert_ne!(Asset::from(NativeAsset::bnb(ChainId(56))), Asset::from(token(56, A)));
    }

    #[test]
    fn test_wrapped() {
        let wbnb = token(56, A);
        assert_eq!(Asset::from(NativeAsset::bnb(ChainId(56))).wrapped(&wbnb).unwrap(), wbnb);
        assert_eq!(Asset::from(token(56, B)).wrapped(&wbnb).unwrap(), token(56, B));
        assert!(Asset::from(NativeAsset::bnb(ChainId(97))).wrapped(&wbnb).is_err());
    }
}
