//! Asset model
//!
//! Value types for fungible assets and the chain-scoped identity rules used
//! to canonicalize pairs.

mod address;
mod amount;
mod chain;
mod price;
mod token;

pub use address::{keccak256, Address, Hash32};
pub use amount::AssetAmount;
pub use chain::ChainId;
pub use price::Price;
pub use token::{Asset, NativeAsset, Token};
