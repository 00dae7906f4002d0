//! Exact rational arithmetic
//!
//! No floating point anywhere: values are [`Fraction`]s of arbitrary-precision
//! integers, rounded only when rendered for display.

mod fraction;
mod percent;
mod rounding;
mod sqrt;
mod width;

pub use fraction::Fraction;
pub use percent::Percent;
pub use rounding::Rounding;
pub use sqrt::sqrt;
pub use width::SolidityType;
