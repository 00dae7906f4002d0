//! Rounding modes for the display operations of [`Fraction`](super::Fraction)

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Rounding applied when a rational value is cut to a fixed number of digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rounding {
    /// Truncate toward zero
    RoundDown,
    /// Ties move away from zero
    #[default]
    RoundHalfUp,
    /// Any non-zero remainder moves away from zero
    RoundUp,
}

/// Integer division of a non-negative numerator by a positive denominator
/// under the given rounding mode.
pub(crate) fn div_round(numerator: &BigInt, denominator: &BigInt, rounding: Rounding) -> BigInt {
    let (quotient, remainder) = numerator.div_rem(denominator);
    if remainder.is_zero() {
        return quotient;
    }
    match rounding {
        Rounding::RoundDown => quotient,
        Rounding::RoundHalfUp => {
            if remainder * 2 >= *denominator {
                quotient + BigInt::one()
            } else {
                quotient
            }
        }
        Rounding::RoundUp => quotient + BigInt::one(),
    }
}
