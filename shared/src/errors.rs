//! Shared error types for the sorting visualizer

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Unknown sorting algorithm: {id}")]
    UnknownAlgorithm { id: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Invalid run id: {input}")]
    InvalidRunId { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
