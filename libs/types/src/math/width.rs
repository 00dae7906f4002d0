//! Integer width bounds mirroring the contract's unsigned types

use crate::common::MathError;
use num_bigint::BigInt;
use num_traits::{One, Signed};
use once_cell::sync::Lazy;

static MAX_UINT8: Lazy<BigInt> = Lazy::new(|| BigInt::from(u8::MAX));
static MAX_UINT256: Lazy<BigInt> = Lazy::new(|| (BigInt::one() << 256) - 1);

/// Unsigned integer widths that raw amounts are checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolidityType {
    Uint8,
    Uint256,
}

impl SolidityType {
    /// Largest value representable at this width
    pub fn maximum(self) -> &'static BigInt {
        match self {
            SolidityType::Uint8 => &MAX_UINT8,
            SolidityType::Uint256 => &MAX_UINT256,
        }
    }

    /// Check `0 <= value <= maximum()`
    pub fn validate(self, value: &BigInt) -> Result<(), MathError> {
        if value.is_negative() {
            return Err(MathError::Underflow {
                value: value.clone(),
            });
        }
        let max = self.maximum();
        if value > max {
            return Err(MathError::Overflow {
                value: value.clone(),
                max: max.clone(),
            });
        }
        Ok(())
    }
}
