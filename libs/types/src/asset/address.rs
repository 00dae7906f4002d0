//! Typed 20-byte addresses and 32-byte hashes
//!
//! Addresses parse from `0x`-prefixed hex in any letter case and display in
//! EIP-55 checksummed form. Byte ordering equals the ordering of the
//! lower-cased hex strings, which is what canonical pair ordering compares.

use crate::common::AssetError;
use alloy_primitives::{Address as RawAddress, B256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Keccak-256 of `data`
pub fn keccak256(data: impl AsRef<[u8]>) -> Hash32 {
    Hash32(alloy_primitives::keccak256(data))
}

/// Parse `0x`-prefixed hex into a fixed-width primitive
fn parse_prefixed<T: FromStr>(input: &str) -> Result<T, AssetError> {
    let invalid = || AssetError::InvalidAddress {
        input: input.to_string(),
    };
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .ok_or_else(invalid)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    digits.parse().map_err(|_| invalid())
}

/// 20-byte account or contract address
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Address(RawAddress);

impl Address {
    pub const ZERO: Address = Address(RawAddress::ZERO);

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(RawAddress::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0 .0 .0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `0x` followed by lower-case hex
    pub fn to_lowercase_hex(&self) -> String {
        format!("0x{}", hex::encode(self.as_bytes()))
    }

    /// EIP-55 mixed-case checksum encoding
    pub fn to_checksum(&self) -> String {
        self.0.to_checksum(None)
    }

    /// CREATE2 address deployed by `self` for `salt` and `init_code_hash`
    pub fn create2(&self, salt: &Hash32, init_code_hash: &Hash32) -> Address {
        Self(self.0.create2(salt.0, init_code_hash.0))
    }
}

impl From<RawAddress> for Address {
    fn from(raw: RawAddress) -> Self {
        Self(raw)
    }
}

impl From<Address> for RawAddress {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl FromStr for Address {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefixed::<RawAddress>(s).map(Self)
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// 32-byte hash, used for pair init-code hashes and CREATE2 salts
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Hash32(B256);

impl Hash32 {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(B256::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0 .0
    }
}

impl FromStr for Hash32 {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefixed::<B256>(s).map(Self)
    }
}

impl fmt::Display for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.as_bytes()))
    }
}

impl fmt::Debug for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash32(0x{})", hex::encode(self.as_bytes()))
    }
}

impl Serialize for Hash32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_known_vectors() {
        // EIP-55 reference vectors
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        ] {
            let address: Address = expected.to_lowercase().parse().unwrap();
            assert_eq!(address.to_checksum(), expected);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let upper: Address = "0xBB4CDB9CBD36B01BD1CBAEBF2DE08D9173BC095C".parse().unwrap();
        let mixed: Address = "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c".parse().unwrap();
        assert_eq!(upper, mixed);
        assert_eq!(mixed.to_string(), "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c");
    }

    #[test]
    fn test_invalid_addresses_rejected() {
        for input in ["", "0x", "bb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c", "0x1234", "0xzz4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"] {
            assert!(matches!(
                input.parse::<Address>(),
                Err(AssetError::InvalidAddress { .. })
            ));
        }
    }

    #[test]
    fn test_byte_order_matches_lowercase_hex_order() {
        let a: Address = "0x0A00000000000000000000000000000000000000".parse().unwrap();
        let b: Address = "0x0b00000000000000000000000000000000000000".parse().unwrap();
        assert!(a < b);
        assert!(a.to_lowercase_hex() < b.to_lowercase_hex());
    }

    #[test]
    fn test_serde_roundtrip_uses_checksum() {
        let address: Address = "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c".parse().unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c\"");
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), address);
    }

    #[test]
    fn test_create2_reference_vector() {
        // EIP-1014 example 0: zero deployer, zero salt, init code 0x00
        let deployer = Address::ZERO;
        let salt = Hash32::new([0u8; 32]);
        let init_code_hash = keccak256([0u8]);
        assert_eq!(
            deployer.create2(&salt, &init_code_hash).to_checksum(),
            "0x4D1A2e2bB4F88F0250f26Ffff098B0b30B26BF38"
        );
    }

    #[test]
    fn test_double_prefix_rejected() {
        assert!("0x0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc09"
            .parse::<Address>()
            .is_err());
    }

    #[test]
    fn test_keccak_empty() {
        assert_eq!(
            keccak256(b"").to_string(),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }
}
