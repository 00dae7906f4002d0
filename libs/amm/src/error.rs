//! Pool engine error taxonomy
//!
//! Every failure is synchronous and deterministic: retrying with the same
//! inputs reproduces the same error. Value-layer errors from `pair-types` are
//! flattened into the matching kind so callers match on a single enum.

use num_bigint::BigInt;
use pair_types::{AssetError, ChainId, MathError};
use thiserror::Error;

/// Boxed failure reported by an external data source
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for pool engine operations
pub type PoolResult<T> = Result<T, PoolError>;

#[derive(Debug, Error)]
pub enum PoolError {
    /// A reserve is zero, or a requested output would drain the pool
    #[error("Insufficient reserves")]
    InsufficientReserves,

    /// Computed output or minted liquidity is not strictly positive
    #[error("Insufficient input amount")]
    InsufficientInputAmount,

    /// Amount or asset does not belong to this pair or its liquidity token
    #[error("Asset mismatch: expected {expected}, got {actual}")]
    AssetMismatch { expected: String, actual: String },

    #[error("Chain mismatch: {left} vs {right}")]
    ChainMismatch { left: ChainId, right: ChainId },

    #[error("Duplicate asset: {address}")]
    DuplicateAsset { address: String },

    /// Raw amount exceeds its integer width bound
    #[error("Overflow: {value} exceeds maximum {max}")]
    Overflow { value: BigInt, max: BigInt },

    /// Protocol-fee adjustment requested without the last recorded invariant
    #[error("Missing parameter: {name}")]
    MissingParameter { name: &'static str },

    /// No factory configuration for the chain
    #[error("No pair configuration for chain {chain_id}")]
    UnsupportedChain { chain_id: ChainId },

    /// Liquidity being valued is larger than the total supply
    #[error("Liquidity {liquidity} exceeds total supply {total_supply}")]
    ExcessLiquidity {
        liquidity: BigInt,
        total_supply: BigInt,
    },

    #[error("Division by zero")]
    DivisionByZero,

    /// Asset-layer failure with no pool-specific kind
    #[error(transparent)]
    Asset(AssetError),

    /// Arithmetic failure with no pool-specific kind
    #[error(transparent)]
    Math(MathError),

    /// The data source failed to produce a value
    #[error("Data source error: {0}")]
    Source(#[source] SourceError),
}

impl From<AssetError> for PoolError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::ChainMismatch { left, right } => PoolError::ChainMismatch { left, right },
            AssetError::DuplicateAsset { address } => PoolError::DuplicateAsset { address },
            AssetError::AssetMismatch { expected, actual } => {
                PoolError::AssetMismatch { expected, actual }
            }
            AssetError::Overflow { value, max } => PoolError::Overflow { value, max },
            AssetError::Math(math) => math.into(),
            other => PoolError::Asset(other),
        }
    }
}

impl From<MathError> for PoolError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::DivisionByZero => PoolError::DivisionByZero,
            MathError::Overflow { value, max } => PoolError::Overflow { value, max },
            other => PoolError::Math(other),
        }
    }
}

impl PoolError {
    pub(crate) fn asset_mismatch(expected: impl ToString, actual: impl ToString) -> Self {
        PoolError::AssetMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_errors_flatten() {
        let err: PoolError = AssetError::ChainMismatch {
            left: ChainId(56),
            right: ChainId(97),
        }
        .into();
        assert!(matches!(err, PoolError::ChainMismatch { .. }));

        let err: PoolError = AssetError::Math(MathError::DivisionByZero).into();
        assert!(matches!(err, PoolError::DivisionByZero));

        let err: PoolError = AssetError::InvalidAddress {
            input: "0x12".to_string(),
        }
        .into();
        assert!(matches!(err, PoolError::Asset(AssetError::InvalidAddress { .. })));
    }

    #[test]
    fn test_source_error_display() {
        let err = PoolError::Source("node unreachable".into());
        assert_eq!(err.to_string(), "Data source error: node unreachable");
    }
}
