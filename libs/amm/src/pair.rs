//! Constant-product pair engine
//!
//! Reproduces the pair contract's integer arithmetic exactly: every division
//! truncates where the contract truncates, and fees are applied as the
//! `numerator / denominator` factor the contract hardcodes. A [`Pair`] is an
//! immutable value; quoting a swap returns the post-trade pair alongside the
//! amount.

use crate::constants::{
    LIQUIDITY_DECIMALS, LIQUIDITY_NAME, LIQUIDITY_SYMBOL, MINIMUM_LIQUIDITY, PROTOCOL_FEE_WEIGHT,
};
use crate::error::{PoolError, PoolResult};
use crate::pair_address::PairAddressResolver;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use pair_config::SwapFee;
use pair_types::{sqrt, Address, Asset, AssetAmount, ChainId, Price, Token};
use std::fmt;
use tracing::{debug, trace};

/// Two-token constant-product pool with reserves in canonical order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    tokens: [Token; 2],
    reserves: [AssetAmount; 2],
    liquidity_token: Token,
    fee: SwapFee,
}

impl Pair {
    /// Pair at its configured address with its chain's swap fee
    pub fn new(
        amount_a: AssetAmount,
        amount_b: AssetAmount,
        resolver: &PairAddressResolver,
    ) -> PoolResult<Self> {
        let token_a = ledger_token(&amount_a)?;
        let token_b = ledger_token(&amount_b)?;
        let address = resolver.pair_address(token_a, token_b)?;
        let fee = resolver.fee(token_a.chain_id)?;
        Self::from_parts(amount_a, amount_b, address, fee)
    }

    /// Pair at an explicit address, for simulation or pre-resolved pairs
    pub fn from_parts(
        amount_a: AssetAmount,
        amount_b: AssetAmount,
        address: Address,
        fee: SwapFee,
    ) -> PoolResult<Self> {
        let token_a = ledger_token(&amount_a)?.clone();
        let token_b = ledger_token(&amount_b)?.clone();

        let (tokens, reserves) = if token_a.sorts_before(&token_b)? {
            ([token_a, token_b], [amount_a, amount_b])
        } else {
            ([token_b, token_a], [amount_b, amount_a])
        };

        let liquidity_token = Token::new(
            tokens[0].chain_id,
            address,
            LIQUIDITY_DECIMALS,
            Some(LIQUIDITY_SYMBOL),
            Some(LIQUIDITY_NAME),
        );

        debug!(
            pair = %address,
            token0 = %tokens[0].address,
            token1 = %tokens[1].address,
            reserve0 = %reserves[0].raw(),
            reserve1 = %reserves[1].raw(),
            "Constructed pair"
        );

        Ok(Self {
            tokens,
            reserves,
            liquidity_token,
            fee,
        })
    }

    pub fn token0(&self) -> &Token {
        &self.tokens[0]
    }

    pub fn token1(&self) -> &Token {
        &self.tokens[1]
    }

    pub fn reserve0(&self) -> &AssetAmount {
        &self.reserves[0]
    }

    pub fn reserve1(&self) -> &AssetAmount {
        &self.reserves[1]
    }

    /// Token representing shares of this pair
    pub fn liquidity_token(&self) -> &Token {
        &self.liquidity_token
    }

    pub fn address(&self) -> Address {
        self.liquidity_token.address
    }

    pub fn chain_id(&self) -> ChainId {
        self.tokens[0].chain_id
    }

    pub fn fee(&self) -> SwapFee {
        self.fee
    }

    pub fn involves_token(&self, token: &Token) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn reserve_of(&self, token: &Token) -> PoolResult<&AssetAmount> {
        Ok(&self.reserves[self.index_of(token)?])
    }

    /// Units of token1 per unit of token0
    pub fn token0_price(&self) -> PoolResult<Price> {
        self.price_at(0)
    }

    /// Units of token0 per unit of token1
    pub fn token1_price(&self) -> PoolResult<Price> {
        self.price_at(1)
    }

    /// Price of `token` in units of the other reserve token
    pub fn price_of(&self, token: &Token) -> PoolResult<Price> {
        self.price_at(self.index_of(token)?)
    }

    /// Quote a swap of `input` into the other token.
    ///
    /// Returns the output amount and the pair after the trade.
    pub fn get_output_amount(&self, input: &AssetAmount) -> PoolResult<(AssetAmount, Pair)> {
        let in_index = self.index_of_asset(input.asset())?;
        let out_index = 1 - in_index;
        self.ensure_reserves()?;

        let input_reserve = self.reserves[in_index].raw();
        let output_reserve = self.reserves[out_index].raw();

        let input_with_fee = input.raw() * BigInt::from(self.fee.numerator());
        let numerator = &input_with_fee * output_reserve;
        let denominator = input_reserve * BigInt::from(self.fee.denominator()) + &input_with_fee;
        let output_raw = numerator / denominator;

        if output_raw.is_zero() {
            return Err(PoolError::InsufficientInputAmount);
        }

        trace!(
            pair = %self.address(),
            amount_in = %input.raw(),
            amount_out = %output_raw,
            "Quoted exact input swap"
        );

        let output = AssetAmount::new(self.tokens[out_index].clone(), output_raw)?;
        let next = self.after_swap(in_index, input, &output)?;
        Ok((output, next))
    }

    /// Quote the minimum input that buys `output` of one reserve token.
    ///
    /// Returns the input amount and the pair after the trade. The output must
    /// leave a non-zero reserve behind.
    pub fn get_input_amount(&self, output: &AssetAmount) -> PoolResult<(AssetAmount, Pair)> {
        let out_index = self.index_of_asset(output.asset())?;
        let in_index = 1 - out_index;
        self.ensure_reserves()?;

        let output_reserve = self.reserves[out_index].raw();
        if output.raw() >= output_reserve {
            return Err(PoolError::InsufficientReserves);
        }
        let input_reserve = self.reserves[in_index].raw();

        let numerator = input_reserve * output.raw() * BigInt::from(self.fee.denominator());
        let denominator = (output_reserve - output.raw()) * BigInt::from(self.fee.numerator());
        let input_raw = numerator / denominator + 1u32;

        trace!(
            pair = %self.address(),
            amount_in = %input_raw,
            amount_out = %output.raw(),
            "Quoted exact output swap"
        );

        let input = AssetAmount::new(self.tokens[in_index].clone(), input_raw)?;
        let next = self.after_swap(in_index, &input, output)?;
        Ok((input, next))
    }

    /// Liquidity minted for depositing `amount_a` and `amount_b` (either order).
    ///
    /// The first deposit into an empty pair locks [`MINIMUM_LIQUIDITY`].
    pub fn get_liquidity_minted(
        &self,
        total_supply: &AssetAmount,
        amount_a: &AssetAmount,
        amount_b: &AssetAmount,
    ) -> PoolResult<AssetAmount> {
        self.ensure_liquidity_asset(total_supply)?;

        let token_a = ledger_token(amount_a)?;
        let token_b = ledger_token(amount_b)?;
        let (amount0, amount1) = if token_a.sorts_before(token_b)? {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        if amount0.asset() != self.reserves[0].asset() || amount1.asset() != self.reserves[1].asset() {
            return Err(PoolError::asset_mismatch(
                format!("{}/{}", self.tokens[0], self.tokens[1]),
                format!("{}/{}", amount0.asset(), amount1.asset()),
            ));
        }

        let liquidity = if total_supply.is_zero() {
            sqrt(&(amount0.raw() * amount1.raw()))? - BigInt::from(MINIMUM_LIQUIDITY)
        } else {
            let reserve0 = self.reserves[0].raw();
            let reserve1 = self.reserves[1].raw();
            if reserve0.is_zero() || reserve1.is_zero() {
                return Err(PoolError::InsufficientReserves);
            }
            let share0 = amount0.raw() * total_supply.raw() / reserve0;
            let share1 = amount1.raw() * total_supply.raw() / reserve1;
            share0.min(share1)
        };

        if !liquidity.is_positive() {
            return Err(PoolError::InsufficientInputAmount);
        }
        Ok(AssetAmount::new(self.liquidity_token.clone(), liquidity)?)
    }

    /// Amount of `token` redeemable for `liquidity` shares.
    ///
    /// With `protocol_fee_on`, the supply is first grown by the fee shares the
    /// contract would mint on the next liquidity event, which requires
    /// `last_invariant` (the reserve product at the last fee mint). A zero
    /// `last_invariant` means no fee has accrued yet and leaves the supply
    /// unadjusted, as does an invariant that has not grown.
    pub fn get_liquidity_value(
        &self,
        token: &Token,
        total_supply: &AssetAmount,
        liquidity: &AssetAmount,
        protocol_fee_on: bool,
        last_invariant: Option<&BigInt>,
    ) -> PoolResult<AssetAmount> {
        let index = self.index_of(token)?;
        self.ensure_liquidity_asset(total_supply)?;
        self.ensure_liquidity_asset(liquidity)?;
        if liquidity.raw() > total_supply.raw() {
            return Err(PoolError::ExcessLiquidity {
                liquidity: liquidity.raw().clone(),
                total_supply: total_supply.raw().clone(),
            });
        }

        let effective_supply = if protocol_fee_on {
            let k_last = last_invariant.ok_or(PoolError::MissingParameter {
                name: "last_invariant",
            })?;
            total_supply.raw() + self.protocol_fee_liquidity(total_supply.raw(), k_last)?
        } else {
            total_supply.raw().clone()
        };

        if effective_supply.is_zero() {
            return Err(PoolError::DivisionByZero);
        }
        let value = liquidity.raw() * self.reserves[index].raw() / effective_supply;
        Ok(AssetAmount::new(token.clone(), value)?)
    }

    /// Shares the protocol fee recipient would be minted for growth of the
    /// invariant since `k_last`
    fn protocol_fee_liquidity(&self, total_supply: &BigInt, k_last: &BigInt) -> PoolResult<BigInt> {
        if k_last.is_zero() {
            return Ok(BigInt::zero());
        }
        let root_k = sqrt(&(self.reserves[0].raw() * self.reserves[1].raw()))?;
        let root_k_last = sqrt(k_last)?;
        if root_k <= root_k_last {
            return Ok(BigInt::zero());
        }
        let numerator = total_supply * (&root_k - &root_k_last);
        let denominator = &root_k * BigInt::from(PROTOCOL_FEE_WEIGHT) + &root_k_last;
        Ok(numerator / denominator)
    }

    fn price_at(&self, index: usize) -> PoolResult<Price> {
        let base = &self.reserves[index];
        let quote = &self.reserves[1 - index];
        if base.is_zero() {
            return Err(PoolError::InsufficientReserves);
        }
        Ok(Price::new(
            base.asset().clone(),
            quote.asset().clone(),
            base.raw().clone(),
            quote.raw().clone(),
        )?)
    }

    fn after_swap(&self, in_index: usize, input: &AssetAmount, output: &AssetAmount) -> PoolResult<Pair> {
        let mut reserves = self.reserves.clone();
        reserves[in_index] = reserves[in_index].checked_add(input)?;
        reserves[1 - in_index] = reserves[1 - in_index].checked_sub(output)?;
        Ok(Pair {
            tokens: self.tokens.clone(),
            reserves,
            liquidity_token: self.liquidity_token.clone(),
            fee: self.fee,
        })
    }

    fn ensure_reserves(&self) -> PoolResult<()> {
        if self.reserves.iter().any(AssetAmount::is_zero) {
            return Err(PoolError::InsufficientReserves);
        }
        Ok(())
    }

    fn ensure_liquidity_asset(&self, amount: &AssetAmount) -> PoolResult<()> {
        match amount.token() {
            Some(token) if *token == self.liquidity_token => Ok(()),
            _ => Err(PoolError::asset_mismatch(&self.liquidity_token, amount.asset())),
        }
    }

    fn index_of(&self, token: &Token) -> PoolResult<usize> {
        self.tokens
            .iter()
            .position(|t| t == token)
            .ok_or_else(|| {
                PoolError::asset_mismatch(format!("{}/{}", self.tokens[0], self.tokens[1]), token)
            })
    }

    fn index_of_asset(&self, asset: &Asset) -> PoolResult<usize> {
        match asset {
            Asset::Ledger(token) => self.index_of(token),
            Asset::Native(_) => Err(PoolError::asset_mismatch(
                format!("{}/{}", self.tokens[0], self.tokens[1]),
                asset,
            )),
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} [{} : {}]",
            self.tokens[0].label(),
            self.tokens[1].label(),
            self.reserves[0].raw(),
            self.reserves[1].raw()
        )
    }
}

fn ledger_token(amount: &AssetAmount) -> PoolResult<&Token> {
    amount
        .token()
        .ok_or_else(|| PoolError::asset_mismatch("ledger token", amount.asset()))
}
