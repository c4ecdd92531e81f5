//! Engine error types

use shared::AlgorithmId;
use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Ways a sort routine can stop before returning a sorted array
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("{algorithm} sort requires non-negative values, found {value} at index {index}")]
    NegativeValue {
        algorithm: AlgorithmId,
        index: usize,
        value: i64,
    },

    #[error("{algorithm} sort cannot index value {value}, limit is {limit}")]
    ValueTooLarge {
        algorithm: AlgorithmId,
        value: i64,
        limit: i64,
    },

    #[error("Run cancelled")]
    Cancelled,

    #[error("Step sink failed: {message}")]
    Sink { message: String },
}
