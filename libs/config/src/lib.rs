//! # Pair Engine Configuration
//!
//! Per-chain deployment settings for the pair engine: which factory and
//! init-code hash derive pair addresses, which router receives liquidity
//! calls, which token wraps the native asset, and the swap fee applied by
//! pool quotes.
//!
//! ## Usage
//!
//! ```rust
//! use pair_config::{EngineConfig, SwapFee};
//! use pair_types::ChainId;
//!
//! let config = EngineConfig::builtin().unwrap();
//! let mainnet = config.chain(ChainId::BSC_MAINNET).unwrap();
//! assert_eq!(mainnet.fee, SwapFee::default());
//! ```

pub mod engine_config;
pub mod protocol;

// Re-export commonly used types
pub use engine_config::{load_config, ChainConfig, EngineConfig, SwapFee, WrappedNativeConfig};
pub use protocol::{DEFAULT_FEE_DENOMINATOR, DEFAULT_FEE_NUMERATOR};
