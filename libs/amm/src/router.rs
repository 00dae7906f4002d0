//! Router call payloads
//!
//! Method-agnostic descriptions of router calls: a method name, positional
//! arguments, and the native value to attach. Turning a payload into a
//! signed transaction belongs to the caller, which also appends recipient
//! and deadline via [`RouterCall::with_recipient`].

use crate::constants::{DEFAULT_SLIPPAGE_BPS, NATIVE_LIQUIDITY_SLIPPAGE_BPS};
use crate::error::{PoolError, PoolResult};
use crate::liquidity::RemoveLiquidityAmounts;
use crate::pair::Pair;
use num_bigint::BigInt;
use pair_types::{Address, AssetAmount, Percent, Token};
use serde::{Serialize, Serializer};
use std::fmt;

/// Router entry points the engine builds payloads for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RouterMethod {
    #[serde(rename = "addLiquidity")]
    AddLiquidity,
    #[serde(rename = "addLiquidityETH")]
    AddLiquidityNative,
    #[serde(rename = "removeLiquidity")]
    RemoveLiquidity,
    #[serde(rename = "removeLiquidityETH")]
    RemoveLiquidityNative,
    #[serde(rename = "swapExactTokensForTokens")]
    SwapExactTokensForTokens,
}

impl RouterMethod {
    /// ABI method name
    pub fn as_str(&self) -> &'static str {
        match self {
            RouterMethod::AddLiquidity => "addLiquidity",
            RouterMethod::AddLiquidityNative => "addLiquidityETH",
            RouterMethod::RemoveLiquidity => "removeLiquidity",
            RouterMethod::RemoveLiquidityNative => "removeLiquidityETH",
            RouterMethod::SwapExactTokensForTokens => "swapExactTokensForTokens",
        }
    }
}

impl fmt::Display for RouterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One positional router argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CallArg {
    Address(Address),
    Uint(#[serde(serialize_with = "serialize_decimal")] BigInt),
    AddressPath(Vec<Address>),
}

/// Method, arguments, and attached native value of a router call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouterCall {
    pub method: RouterMethod,
    pub args: Vec<CallArg>,
    #[serde(serialize_with = "serialize_optional_decimal")]
    pub value: Option<BigInt>,
}

/// 0.8%, the tolerance used for token-only legs
pub fn default_slippage() -> Percent {
    Percent::from_bps(DEFAULT_SLIPPAGE_BPS)
}

/// 15%, the tolerance used when adding liquidity with a native leg
pub fn native_liquidity_slippage() -> Percent {
    Percent::from_bps(NATIVE_LIQUIDITY_SLIPPAGE_BPS)
}

impl RouterCall {
    /// Deposit two tokens; arguments follow canonical token order
    pub fn add_liquidity(
        amount_a: &AssetAmount,
        amount_b: &AssetAmount,
        slippage: &Percent,
    ) -> PoolResult<Self> {
        let token_a = expect_token(amount_a)?;
        let token_b = expect_token(amount_b)?;
        let (amount0, amount1) = if token_a.sorts_before(token_b)? {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        Ok(Self {
            method: RouterMethod::AddLiquidity,
            args: vec![
                CallArg::Address(expect_token(amount0)?.address),
                CallArg::Address(expect_token(amount1)?.address),
                CallArg::Uint(amount0.raw().clone()),
                CallArg::Uint(amount1.raw().clone()),
                CallArg::Uint(amount0.with_slippage(slippage)?.raw().clone()),
                CallArg::Uint(amount1.with_slippage(slippage)?.raw().clone()),
            ],
            value: None,
        })
    }

    /// Deposit one token alongside the native asset, which is sent as value
    pub fn add_liquidity_native(
        amount_a: &AssetAmount,
        amount_b: &AssetAmount,
        slippage: &Percent,
    ) -> PoolResult<Self> {
        let (native, token_amount) = match (amount_a.asset().is_native(), amount_b.asset().is_native()) {
            (true, false) => (amount_a, amount_b),
            (false, true) => (amount_b, amount_a),
            _ => {
                return Err(PoolError::asset_mismatch(
                    "one native and one ledger amount",
                    format!("{} and {}", amount_a.asset(), amount_b.asset()),
                ))
            }
        };
        let token = expect_token(token_amount)?;
        if native.asset().chain_id() != token.chain_id {
            return Err(PoolError::ChainMismatch {
                left: token.chain_id,
                right: native.asset().chain_id(),
            });
        }
        Ok(Self {
            method: RouterMethod::AddLiquidityNative,
            args: vec![
                CallArg::Address(token.address),
                CallArg::Uint(token_amount.raw().clone()),
                CallArg::Uint(token_amount.with_slippage(slippage)?.raw().clone()),
                CallArg::Uint(native.with_slippage(slippage)?.raw().clone()),
            ],
            value: Some(native.raw().clone()),
        })
    }

    /// Burn shares for both underlying tokens
    pub fn remove_liquidity(
        pair: &Pair,
        amounts: &RemoveLiquidityAmounts,
        slippage: &Percent,
    ) -> PoolResult<Self> {
        Ok(Self {
            method: RouterMethod::RemoveLiquidity,
            args: vec![
                CallArg::Address(pair.token0().address),
                CallArg::Address(pair.token1().address),
                CallArg::Uint(amounts.liquidity.raw().clone()),
                CallArg::Uint(amounts.amount0.with_slippage(slippage)?.raw().clone()),
                CallArg::Uint(amounts.amount1.with_slippage(slippage)?.raw().clone()),
            ],
            value: None,
        })
    }

    /// Burn shares of a pair holding `wrapped_native`, unwrapping that leg
    pub fn remove_liquidity_native(
        pair: &Pair,
        amounts: &RemoveLiquidityAmounts,
        wrapped_native: &Token,
        slippage: &Percent,
    ) -> PoolResult<Self> {
        let (token, token_amount, native_amount) = if pair.token0() == wrapped_native {
            (pair.token1(), &amounts.amount1, &amounts.amount0)
        } else if pair.token1() == wrapped_native {
            (pair.token0(), &amounts.amount0, &amounts.amount1)
        } else {
            return Err(PoolError::asset_mismatch(wrapped_native, pair));
        };
        Ok(Self {
            method: RouterMethod::RemoveLiquidityNative,
            args: vec![
                CallArg::Address(token.address),
                CallArg::Uint(amounts.liquidity.raw().clone()),
                CallArg::Uint(token_amount.with_slippage(slippage)?.raw().clone()),
                CallArg::Uint(native_amount.with_slippage(slippage)?.raw().clone()),
            ],
            value: None,
        })
    }

    /// Sell exactly `input` through `pair`, accepting at least the slipped quote
    pub fn swap_exact_tokens_for_tokens(
        pair: &Pair,
        input: &AssetAmount,
        slippage: &Percent,
    ) -> PoolResult<Self> {
        let (output, _) = pair.get_output_amount(input)?;
        let path = vec![expect_token(input)?.address, expect_token(&output)?.address];
        Ok(Self {
            method: RouterMethod::SwapExactTokensForTokens,
            args: vec![
                CallArg::Uint(input.raw().clone()),
                CallArg::Uint(output.with_slippage(slippage)?.raw().clone()),
                CallArg::AddressPath(path),
            ],
            value: None,
        })
    }

    /// Append the recipient and unix-seconds deadline every router method takes last
    pub fn with_recipient(mut self, recipient: Address, deadline: u64) -> Self {
        self.args.push(CallArg::Address(recipient));
        self.args.push(CallArg::Uint(BigInt::from(deadline)));
        self
    }
}

fn expect_token(amount: &AssetAmount) -> PoolResult<&Token> {
    amount
        .token()
        .ok_or_else(|| PoolError::asset_mismatch("ledger token", amount.asset()))
}

fn serialize_decimal<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

fn serialize_optional_decimal<S: Serializer>(
    value: &Option<BigInt>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serializer.serialize_str(&value.to_string()),
        None => serializer.serialize_none(),
    }
}
