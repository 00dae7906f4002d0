//! Percentages for slippage tolerances and liquidity-removal shares

use super::fraction::Fraction;
use super::rounding::Rounding;
use crate::common::MathError;
use num_bigint::BigInt;
use std::fmt;

/// A [`Fraction`] displayed scaled by 100.
///
/// `Percent::new(1, 2)` is fifty percent: arithmetic sees `1/2`, display
/// sees `50`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(Fraction);

impl Percent {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self, MathError> {
        Ok(Self(Fraction::new(numerator, denominator)?))
    }

    /// Basis points: `from_bps(80)` is 0.8%
    pub fn from_bps(bps: u32) -> Self {
        Self(Fraction::ratio(BigInt::from(bps), BigInt::from(10_000u32)))
    }

    pub fn as_fraction(&self) -> &Fraction {
        &self.0
    }

    /// `floor(value × self)`, the share of an integer amount
    pub fn apply(&self, value: &BigInt) -> BigInt {
        (&self.0 * &Fraction::from_integer(value.clone())).quotient()
    }

    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> String {
        self.scaled().to_significant(significant_digits, rounding)
    }

    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.scaled().to_fixed(decimal_places, rounding)
    }

    fn scaled(&self) -> Fraction {
        &self.0 * &Fraction::from_integer(100u32)
    }
}

impl From<Fraction> for Percent {
    fn from(fraction: Fraction) -> Self {
        Self(fraction)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.to_significant(5, Rounding::RoundHalfUp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scaled_by_hundred() {
        assert_eq!(Percent::new(1, 2).unwrap().to_string(), "50%");
        assert_eq!(Percent::from_bps(80).to_string(), "0.8%");
        assert_eq!(Percent::new(1, 3).unwrap().to_fixed(2, Rounding::RoundDown), "33.33");
    }

    #[test]
    fn test_negative_denominator_normalized() {
        let p = Percent::new(-1, -4).unwrap();
        assert_eq!(p.to_string(), "25%");
        assert_eq!(p.as_fraction().denominator(), &BigInt::from(4));
    }

    #[test]
    fn test_apply_floors() {
        let p = Percent::new(50, 100).unwrap();
        assert_eq!(p.apply(&BigInt::from(7)), BigInt::from(3));
    }

    #[test]
    fn test_zero_denominator_rejected() {
        assert!(Percent::new(1, 0).is_err());
    }
}
