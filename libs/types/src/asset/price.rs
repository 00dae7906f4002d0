//! Exchange rates between two assets

use super::amount::AssetAmount;
use super::token::Asset;
use crate::common::{AssetError, MathError};
use crate::math::{Fraction, Rounding};
use num_bigint::BigInt;
use std::fmt;

/// Units of `quote` per unit of `base`.
///
/// `raw` is the ratio of raw integer amounts; `scalar` corrects for the two
/// assets' decimals when the price is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    base: Asset,
    quote: Asset,
    raw: Fraction,
    scalar: Fraction,
}

impl Price {
    /// `quote_raw / base_raw`; fails when `base_raw` is zero
    pub fn new(
        base: Asset,
        quote: Asset,
        base_raw: impl Into<BigInt>,
        quote_raw: impl Into<BigInt>,
    ) -> Result<Self, MathError> {
        let raw = Fraction::new(quote_raw, base_raw)?;
        let scalar = Fraction::ratio(
            num_traits::pow(BigInt::from(10u32), usize::from(base.decimals())),
            num_traits::pow(BigInt::from(10u32), usize::from(quote.decimals())),
        );
        Ok(Self {
            base,
            quote,
            raw,
            scalar,
        })
    }

    pub fn base(&self) -> &Asset {
        &self.base
    }

    pub fn quote_asset(&self) -> &Asset {
        &self.quote
    }

    /// Ratio of raw amounts, no decimal adjustment
    pub fn raw(&self) -> &Fraction {
        &self.raw
    }

    /// Ratio in whole units of each asset
    pub fn adjusted(&self) -> Fraction {
        &self.raw * &self.scalar
    }

    /// Same rate seen from the other side
    pub fn invert(&self) -> Result<Price, MathError> {
        Ok(Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
            raw: self.raw.invert()?,
            scalar: self.scalar.invert()?,
        })
    }

    /// Chain `base→quote` with `quote→other` into `base→other`
    pub fn multiply(&self, other: &Price) -> Result<Price, AssetError> {
        if self.quote != other.base {
            return Err(AssetError::AssetMismatch {
                expected: self.quote.to_string(),
                actual: other.base.to_string(),
            });
        }
        Ok(Self {
            base: self.base.clone(),
            quote: other.quote.clone(),
            raw: &self.raw * &other.raw,
            scalar: &self.scalar * &other.scalar,
        })
    }

    /// Convert an amount of the base asset into the quote asset, flooring
    pub fn quote(&self, amount: &AssetAmount) -> Result<AssetAmount, AssetError> {
        if *amount.asset() != self.base {
            return Err(AssetError::AssetMismatch {
                expected: self.base.to_string(),
                actual: amount.asset().to_string(),
            });
        }
        let converted = &self.raw * &Fraction::from_integer(amount.raw().clone());
        AssetAmount::new(self.quote.clone(), converted.quotient())
    }

    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> String {
        self.adjusted().to_significant(significant_digits, rounding)
    }

    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.adjusted().to_fixed(decimal_places, rounding)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{}",
            self.to_significant(6, Rounding::RoundHalfUp),
            self.quote.label(),
            self.base.label()
        )
    }
}
