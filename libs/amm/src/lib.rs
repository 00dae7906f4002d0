//! # Pair AMM Library - Exact Constant-Product Engine
//!
//! ## Purpose
//!
//! Off-chain replica of a constant-product pair contract's integer math.
//! Swap quotes, minted liquidity, and redeemable liquidity value match what
//! the deployed contract executes, to the unit, because every step uses
//! arbitrary-precision integers and the contract's truncation points.
//!
//! ## Integration Points
//!
//! - **Input Sources**: raw reserves and share balances from a [`PairDataSource`]
//! - **Configuration**: factory, init-code hash, and swap fee per chain from `pair-config`
//! - **Output Destinations**: quote consumers, and transaction builders via [`RouterCall`]
//! - **Precision**: no floating point; [`pair_types::Fraction`] for every ratio
//!
//! ## Architecture Role
//!
//! ```text
//! EngineConfig ──► PairAddressResolver ──► PairAddressCache (DashMap)
//!                        │
//! PairDataSource ──► fetch_pair ──► Pair ──► get_output_amount / get_input_amount
//!                                    │   ──► get_liquidity_minted / get_liquidity_value
//!                                    └──► LiquidityInfo ──► RemoveLiquidityAmounts ──► RouterCall
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pair_amm::Pair;
//! use pair_config::SwapFee;
//! use pair_types::{AssetAmount, ChainId, Token};
//!
//! let token = |addr: &str| Token::parse(ChainId::BSC_MAINNET, addr, 18, None, None).unwrap();
//! let a = token("0x0000000000000000000000000000000000000001");
//! let b = token("0x0000000000000000000000000000000000000002");
//!
//! let pair = Pair::from_parts(
//!     AssetAmount::new(a.clone(), 1_000u64).unwrap(),
//!     AssetAmount::new(b, 1_000u64).unwrap(),
//!     "0x00000000000000000000000000000000000000aa".parse().unwrap(),
//!     SwapFee::default(),
//! )
//! .unwrap();
//!
//! let (output, _next) = pair.get_output_amount(&AssetAmount::new(a, 100u64).unwrap()).unwrap();
//! assert_eq!(output.raw().to_string(), "90");
//! ```

pub mod constants;
pub mod error;
pub mod fetcher;
pub mod liquidity;
pub mod pair;
pub mod pair_address;
pub mod router;

pub use constants::MINIMUM_LIQUIDITY;
pub use error::{PoolError, PoolResult, SourceError};
pub use fetcher::{fetch_liquidity_info, fetch_liquidity_positions, fetch_pair, PairDataSource};
pub use liquidity::{LiquidityInfo, RemoveLiquidityAmounts};
pub use pair::Pair;
pub use pair_address::{
    all_pair_addresses, compute_pair_address, PairAddressCache, PairAddressResolver, PairKey,
};
pub use router::{default_slippage, native_liquidity_slippage, CallArg, RouterCall, RouterMethod};
