//! Exact integer square root

use crate::common::MathError;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Floor square root of a non-negative integer using Babylonian iteration.
///
/// The iteration starts above the root and decreases monotonically, so it
/// terminates on the exact floor for any size of input. Liquidity minting
/// depends on this matching the on-chain integer routine bit for bit.
pub fn sqrt(value: &BigInt) -> Result<BigInt, MathError> {
    if value.is_negative() {
        return Err(MathError::NegativeSquareRoot {
            value: value.clone(),
        });
    }
    if value.is_zero() {
        return Ok(BigInt::zero());
    }
    if *value < BigInt::from(4) {
        return Ok(BigInt::one());
    }

    let mut z = value.clone();
    let mut x: BigInt = value / 2 + 1;
    while x < z {
        z = x.clone();
        x = (value / &x + &x) / 2;
    }
    Ok(z)
}
