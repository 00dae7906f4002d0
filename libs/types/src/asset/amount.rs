//! Width-checked amounts bound to one asset

use super::token::{Asset, Token};
use crate::common::{AssetError, MathError};
use crate::math::{Fraction, Percent, Rounding, SolidityType};
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;

/// Raw integer amount in an asset's smallest unit.
///
/// Construction enforces `0 <= raw <= max(width)`; the default width is
/// `uint256`. Out-of-range raw values are a hard error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetAmount {
    asset: Asset,
    raw: BigInt,
}

impl AssetAmount {
    pub fn new(asset: impl Into<Asset>, raw: impl Into<BigInt>) -> Result<Self, AssetError> {
        Self::with_width(asset, raw, SolidityType::Uint256)
    }

    /// Construct against a narrower (or explicit) integer width
    pub fn with_width(
        asset: impl Into<Asset>,
        raw: impl Into<BigInt>,
        width: SolidityType,
    ) -> Result<Self, AssetError> {
        let raw = raw.into();
        width.validate(&raw).map_err(|e| match e {
            MathError::Underflow { value } => AssetError::NegativeAmount { value },
            MathError::Overflow { value, max } => AssetError::Overflow { value, max },
            other => AssetError::Math(other),
        })?;
        Ok(Self {
            asset: asset.into(),
            raw,
        })
    }

    pub fn zero(asset: impl Into<Asset>) -> Self {
        Self {
            asset: asset.into(),
            raw: BigInt::zero(),
        }
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    /// The ledger token, when the amount is not native
    pub fn token(&self) -> Option<&Token> {
        self.asset.as_token()
    }

    pub fn raw(&self) -> &BigInt {
        &self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Human-scale value `raw / 10^decimals`
    pub fn as_fraction(&self) -> Fraction {
        let scale = num_traits::pow(BigInt::from(10u32), usize::from(self.asset.decimals()));
        Fraction::ratio(self.raw.clone(), scale)
    }

    pub fn checked_add(&self, other: &AssetAmount) -> Result<AssetAmount, AssetError> {
        self.ensure_same_asset(other)?;
        Self::new(self.asset.clone(), &self.raw + &other.raw)
    }

    pub fn checked_sub(&self, other: &AssetAmount) -> Result<AssetAmount, AssetError> {
        self.ensure_same_asset(other)?;
        Self::new(self.asset.clone(), &self.raw - &other.raw)
    }

    /// Smallest amount acceptable under `slippage`: `floor(raw × (1 − slippage))`
    pub fn with_slippage(&self, slippage: &Percent) -> Result<AssetAmount, AssetError> {
        let keep = &Fraction::one() - slippage.as_fraction();
        let scaled = &keep * &Fraction::from_integer(self.raw.clone());
        Self::new(self.asset.clone(), scaled.quotient())
    }

    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> String {
        self.as_fraction().to_significant(significant_digits, rounding)
    }

    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.as_fraction().to_fixed(decimal_places, rounding)
    }

    /// Every decimal of the asset, nothing rounded away
    pub fn to_exact(&self) -> String {
        self.to_fixed(u32::from(self.asset.decimals()), Rounding::RoundDown)
    }

    fn ensure_same_asset(&self, other: &AssetAmount) -> Result<(), AssetError> {
        if self.asset != other.asset {
            return Err(AssetError::AssetMismatch {
                expected: self.asset.to_string(),
                actual: other.asset.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for AssetAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.asset.label())
    }
}
