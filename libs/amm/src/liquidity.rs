//! Liquidity position views
//!
//! Combines a [`Pair`] with externally fetched share balances into the
//! underlying token amounts a position can redeem, and scales a position down
//! for partial withdrawals.

use crate::error::PoolResult;
use crate::pair::Pair;
use num_bigint::BigInt;
use pair_types::{AssetAmount, Percent};

/// A holder's share of a pair and what it redeems for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidityInfo {
    pub total_supply: AssetAmount,
    pub user_liquidity: AssetAmount,
    /// `[reserve0, reserve1]`
    pub reserves: [AssetAmount; 2],
    pub amount0: AssetAmount,
    pub amount1: AssetAmount,
}

impl LiquidityInfo {
    /// Position view from raw share balances, valued without the protocol fee
    pub fn new(pair: &Pair, total_supply: BigInt, user_liquidity: BigInt) -> PoolResult<Self> {
        let total_supply = AssetAmount::new(pair.liquidity_token().clone(), total_supply)?;
        let user_liquidity = AssetAmount::new(pair.liquidity_token().clone(), user_liquidity)?;
        let amount0 =
            pair.get_liquidity_value(pair.token0(), &total_supply, &user_liquidity, false, None)?;
        let amount1 =
            pair.get_liquidity_value(pair.token1(), &total_supply, &user_liquidity, false, None)?;
        Ok(Self {
            total_supply,
            user_liquidity,
            reserves: [pair.reserve0().clone(), pair.reserve1().clone()],
            amount0,
            amount1,
        })
    }

    pub fn has_position(&self) -> bool {
        !self.user_liquidity.is_zero()
    }
}

/// Shares to burn and underlying amounts expected for a partial withdrawal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveLiquidityAmounts {
    pub liquidity: AssetAmount,
    pub amount0: AssetAmount,
    pub amount1: AssetAmount,
    pub percent: Percent,
}

impl RemoveLiquidityAmounts {
    /// Scale `info` by `percent`, flooring each amount
    pub fn from_percent(pair: &Pair, percent: Percent, info: &LiquidityInfo) -> PoolResult<Self> {
        let scale = |amount: &AssetAmount| AssetAmount::new(amount.asset().clone(), percent.apply(amount.raw()));
        let liquidity = AssetAmount::new(
            pair.liquidity_token().clone(),
            percent.apply(info.user_liquidity.raw()),
        )?;
        let amount0 = scale(&info.amount0)?;
        let amount1 = scale(&info.amount1)?;
        Ok(Self {
            liquidity,
            amount0,
            amount1,
            percent,
        })
    }
}
