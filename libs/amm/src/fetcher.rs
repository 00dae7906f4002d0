//! Data-source contract for live pair state
//!
//! The engine performs no network access. Implementations of
//! [`PairDataSource`] supply raw reserves and share balances; the helpers here
//! feed them into the pure core. Source failures surface as
//! [`PoolError::Source`] and are never retried.

use crate::error::{PoolError, PoolResult, SourceError};
use crate::liquidity::LiquidityInfo;
use crate::pair::Pair;
use crate::pair_address::{all_pair_addresses, PairAddressResolver};
use async_trait::async_trait;
use num_bigint::BigInt;
use pair_types::{Address, AssetAmount, Token};
use tracing::{debug, warn};

/// Raw on-chain values the engine consumes
#[async_trait]
pub trait PairDataSource: Send + Sync {
    /// `(reserve0, reserve1)` of the pair contract at `pair`
    async fn reserves(&self, pair: Address) -> Result<(BigInt, BigInt), SourceError>;

    /// `totalSupply()` of `token`
    async fn total_supply(&self, token: Address) -> Result<BigInt, SourceError>;

    /// `balanceOf(owner)` of `token`
    async fn balance_of(&self, token: Address, owner: Address) -> Result<BigInt, SourceError>;
}

/// Build the pair for two tokens from its current reserves
pub async fn fetch_pair<S>(
    source: &S,
    resolver: &PairAddressResolver,
    token_a: &Token,
    token_b: &Token,
) -> PoolResult<Pair>
where
    S: PairDataSource + ?Sized,
{
    let address = resolver.pair_address(token_a, token_b)?;
    let (reserve0, reserve1) = source.reserves(address).await.map_err(PoolError::Source)?;
    debug!(pair = %address, %reserve0, %reserve1, "Fetched reserves");

    let (token0, token1) = token_a.sort_pair(token_b)?;
    Pair::from_parts(
        AssetAmount::new(token0.clone(), reserve0)?,
        AssetAmount::new(token1.clone(), reserve1)?,
        address,
        resolver.fee(token0.chain_id)?,
    )
}

/// Position of `owner` in `pair`
pub async fn fetch_liquidity_info<S>(source: &S, pair: &Pair, owner: Address) -> PoolResult<LiquidityInfo>
where
    S: PairDataSource + ?Sized,
{
    let liquidity_token = pair.address();
    let total_supply = source
        .total_supply(liquidity_token)
        .await
        .map_err(PoolError::Source)?;
    let user_liquidity = source
        .balance_of(liquidity_token, owner)
        .await
        .map_err(PoolError::Source)?;
    LiquidityInfo::new(pair, total_supply, user_liquidity)
}

/// Every non-empty position of `owner` across all pairs formed from `tokens`
///
/// Pairs whose reserves cannot be fetched (typically never deployed) are
/// skipped. Results are ordered by pair address.
pub async fn fetch_liquidity_positions<S>(
    source: &S,
    resolver: &PairAddressResolver,
    owner: Address,
    tokens: &[Token],
) -> PoolResult<Vec<LiquidityInfo>>
where
    S: PairDataSource + ?Sized,
{
    let mut candidates: Vec<_> = all_pair_addresses(resolver, tokens)?.into_iter().collect();
    candidates.sort_by_key(|(address, _)| *address);

    let mut positions = Vec::new();
    for (address, (token0, token1)) in candidates {
        let pair = match fetch_pair(source, resolver, &token0, &token1).await {
            Ok(pair) => pair,
            Err(e) => {
                warn!(pair = %address, error = %e, "Skipping pair that failed to fetch");
                continue;
            }
        };
        let info = fetch_liquidity_info(source, &pair, owner).await?;
        if info.has_position() {
            positions.push(info);
        }
    }
    debug!(%owner, count = positions.len(), "Fetched liquidity positions");
    Ok(positions)
}
