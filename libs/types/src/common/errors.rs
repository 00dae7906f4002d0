//! Error types for exact rational arithmetic and asset validation
//!
//! Provides typed failures for division by zero, integer-width overflow, and
//! the identity rules that canonical pair ordering depends on.

use crate::asset::ChainId;
use num_bigint::BigInt;
use thiserror::Error;

/// Errors that can occur during exact rational arithmetic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A fraction was built with, or divided by, a zero value
    #[error("Division by zero in rational arithmetic")]
    DivisionByZero,

    /// Square root requested for a negative integer
    #[error("Cannot take the square root of negative value {value}")]
    NegativeSquareRoot { value: BigInt },

    /// Value exceeds the maximum representable value for its integer width
    #[error("Overflow: value {value} exceeds maximum {max}")]
    Overflow { value: BigInt, max: BigInt },

    /// Value is negative where only unsigned integers are accepted
    #[error("Underflow: value {value} is negative")]
    Underflow { value: BigInt },

    /// Fixed-point rendering could not be represented as a `Decimal`
    #[error("Value '{input}' cannot be represented as a Decimal")]
    DecimalConversion { input: String },
}

/// Errors that can occur when comparing or combining assets
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Ordering requested between assets on different chains
    #[error("Chain mismatch: {left} vs {right}")]
    ChainMismatch { left: ChainId, right: ChainId },

    /// Ordering requested between an asset and itself
    #[error("Duplicate asset: {address}")]
    DuplicateAsset { address: String },

    /// Operation mixed amounts or prices of different assets
    #[error("Asset mismatch: expected {expected}, got {actual}")]
    AssetMismatch { expected: String, actual: String },

    /// Raw amount outside its integer width bound
    #[error("Overflow: raw amount {value} exceeds maximum {max}")]
    Overflow { value: BigInt, max: BigInt },

    /// Raw amount is negative
    #[error("Raw amount {value} is negative")]
    NegativeAmount { value: BigInt },

    /// Address string is not 20 bytes of hex
    #[error("Invalid address: '{input}'")]
    InvalidAddress { input: String },

    /// Arithmetic failure while combining amounts
    #[error(transparent)]
    Math(#[from] MathError),
}
