//! Constants fixed by the deployed pair contracts

/// Liquidity permanently locked by the first mint of every pair
pub const MINIMUM_LIQUIDITY: u64 = 1_000;

/// Divisor weight in the protocol fee mint: one sixth of fee growth
pub const PROTOCOL_FEE_WEIGHT: u64 = 5;

/// Liquidity tokens always carry 18 decimals
pub const LIQUIDITY_DECIMALS: u8 = 18;

pub const LIQUIDITY_SYMBOL: &str = "UNI-V2";

pub const LIQUIDITY_NAME: &str = "Uniswap V2";

/// Minimum-amount tolerance for liquidity and token swaps, in basis points
pub const DEFAULT_SLIPPAGE_BPS: u32 = 80;

/// Minimum-amount tolerance for liquidity adds with a native leg
pub const NATIVE_LIQUIDITY_SLIPPAGE_BPS: u32 = 1_500;
