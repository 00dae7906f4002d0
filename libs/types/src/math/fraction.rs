//! Exact rational numbers over arbitrary-precision integers
//!
//! Arithmetic never rounds and never reduces: numerators and denominators are
//! carried through cross-multiplication exactly as the contract's integer math
//! would see them. Rounding happens only in the two display operations,
//! [`Fraction::to_significant`] and [`Fraction::to_fixed`].

use super::rounding::{div_round, Rounding};
use crate::common::MathError;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// Rational value `numerator / denominator` with a strictly positive denominator
#[derive(Debug, Clone)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Build a fraction, normalizing the sign onto the numerator.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self, MathError> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        if denominator.is_negative() {
            return Ok(Self {
                numerator: -numerator,
                denominator: -denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Caller guarantees a positive denominator
    pub(crate) fn ratio(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(denominator.is_positive());
        Self {
            numerator,
            denominator,
        }
    }

    /// Whole number `value / 1`
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Integer part, truncated toward zero
    pub fn quotient(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// Fractional part left over after [`Fraction::quotient`]
    pub fn remainder(&self) -> Fraction {
        Self {
            numerator: &self.numerator % &self.denominator,
            denominator: self.denominator.clone(),
        }
    }

    /// Swap numerator and denominator
    pub fn invert(&self) -> Result<Fraction, MathError> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Exact division; fails when `other` is zero
    pub fn checked_div(&self, other: &Fraction) -> Result<Fraction, MathError> {
        if other.numerator.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Self::new(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        )
    }

    /// Render with `significant_digits` significant digits.
    ///
    /// Trailing zeros are dropped, so values that are exact at fewer digits
    /// print shorter. A request for zero digits is treated as one.
    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> String {
        self.format_significant(significant_digits, rounding, None)
    }

    /// Render with exactly `decimal_places` digits after the point.
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.format_fixed(decimal_places, rounding, None)
    }

    /// [`Fraction::to_significant`] with an optional thousands separator.
    ///
    /// Zero significant digits renders as one.
    pub fn format_significant(
        &self,
        significant_digits: u32,
        rounding: Rounding,
        group_separator: Option<char>,
    ) -> String {
        if self.numerator.is_zero() {
            return "0".to_string();
        }
        let significant_digits = i64::from(significant_digits.max(1));
        let magnitude = self.numerator.abs();
        let exponent = decimal_exponent(&magnitude, &self.denominator);
        let shift = significant_digits - 1 - exponent;

        let digits = if shift >= 0 {
            div_round(&(magnitude * pow10(shift)), &self.denominator, rounding)
        } else {
            div_round(&magnitude, &(&self.denominator * pow10(-shift)), rounding)
        };

        let rendered = trim_trailing_zeros(render_scaled(&digits, shift));
        finish(rendered, self.numerator.is_negative(), group_separator)
    }

    /// [`Fraction::to_fixed`] with an optional thousands separator.
    pub fn format_fixed(
        &self,
        decimal_places: u32,
        rounding: Rounding,
        group_separator: Option<char>,
    ) -> String {
        let shift = i64::from(decimal_places);
        let digits = div_round(
            &(self.numerator.abs() * pow10(shift)),
            &self.denominator,
            rounding,
        );
        let negative = self.numerator.is_negative() && !digits.is_zero();
        finish(render_scaled(&digits, shift), negative, group_separator)
    }

    /// Fixed-point rendering converted into a `Decimal`, rounded down.
    ///
    /// For display consumers only; fails when the value does not fit.
    pub fn to_decimal(&self, decimal_places: u32) -> Result<Decimal, MathError> {
        let rendered = self.to_fixed(decimal_places, Rounding::RoundDown);
        Decimal::from_str(&rendered).map_err(|_| MathError::DecimalConversion { input: rendered })
    }
}

fn pow10(exponent: i64) -> BigInt {
    num_traits::pow(BigInt::from(10u32), exponent.unsigned_abs() as usize)
}

/// `floor(log10(numerator / denominator))` for a positive value
fn decimal_exponent(numerator: &BigInt, denominator: &BigInt) -> i64 {
    let quotient = numerator / denominator;
    if !quotient.is_zero() {
        return quotient.to_string().len() as i64 - 1;
    }
    let mut k = (denominator.to_string().len() as i64 - numerator.to_string().len() as i64).max(1);
    while numerator * pow10(k) < *denominator {
        k += 1;
    }
    while k > 1 && numerator * pow10(k - 1) >= *denominator {
        k -= 1;
    }
    -k
}

/// Render `digits * 10^-shift` as a plain decimal string
fn render_scaled(digits: &BigInt, shift: i64) -> String {
    let text = digits.to_string();
    if shift <= 0 {
        if digits.is_zero() {
            return text;
        }
        return format!("{}{}", text, "0".repeat(shift.unsigned_abs() as usize));
    }
    let places = shift as usize;
    let padded = if text.len() <= places {
        format!("{}{}", "0".repeat(places + 1 - text.len()), text)
    } else {
        text
    };
    let split = padded.len() - places;
    format!("{}.{}", &padded[..split], &padded[split..])
}

fn trim_trailing_zeros(rendered: String) -> String {
    if !rendered.contains('.') {
        return rendered;
    }
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn finish(rendered: String, negative: bool, group_separator: Option<char>) -> String {
    let grouped = match group_separator {
        Some(separator) => group_integer_part(&rendered, separator),
        None => rendered,
    };
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_integer_part(rendered: &str, separator: char) -> String {
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered, None),
    };
    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, other: &Fraction) -> Fraction {
        if self.denominator == other.denominator {
            return Fraction {
                numerator: &self.numerator + &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Fraction {
            numerator: &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }
}

impl Sub<&Fraction> for &Fraction {
    type Output = Fraction;

    fn sub(self, other: &Fraction) -> Fraction {
        if self.denominator == other.denominator {
            return Fraction {
                numerator: &self.numerator - &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Fraction {
            numerator: &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, other: &Fraction) -> Fraction {
        Fraction {
            numerator: &self.numerator * &other.numerator,
            denominator: &self.denominator * &other.denominator,
        }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, other: Fraction) -> Fraction {
        &self + &other
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, other: Fraction) -> Fraction {
        &self - &other
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, other: Fraction) -> Fraction {
        &self * &other
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<u64> for Fraction {
    fn from(value: u64) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
