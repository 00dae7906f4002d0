//! # Pair Types
//!
//! Exact rational arithmetic and asset value types for constant-product pair
//! accounting.
//!
//! ## Design Philosophy
//!
//! - **No Floating Point**: every value is a [`Fraction`] of arbitrary-precision integers
//! - **Unreduced Arithmetic**: numerators and denominators are carried as the contract computes them
//! - **Explicit Rounding**: only display operations round, and always under a named [`Rounding`]
//! - **Width Checked**: raw amounts are bounded by their unsigned integer width at construction
//!
//! ## Quick Start
//!
//! ```rust
//! use pair_types::{AssetAmount, ChainId, Fraction, Rounding, Token};
//!
//! let third = Fraction::new(1, 3).unwrap();
//! assert_eq!(third.to_significant(5, Rounding::RoundHalfUp), "0.33333");
//!
//! let usdt = Token::parse(
//!     ChainId::BSC_MAINNET,
//!     "0x55d398326f99059fF775485246999027B3197955",
//!     18,
//!     Some("USDT"),
//!     None,
//! )
//! .unwrap();
//! let amount = AssetAmount::new(usdt, 1_500_000_000_000_000_000u64).unwrap();
//! assert_eq!(amount.to_significant(2, Rounding::RoundDown), "1.5");
//! ```

pub mod asset;
pub mod common;
pub mod math;

pub use asset::{keccak256, Address, Asset, AssetAmount, ChainId, Hash32, NativeAsset, Price, Token};
pub use common::{AssetError, MathError};
pub use math::{sqrt, Fraction, Percent, Rounding, SolidityType};
