//! Coordinator-specific error types

use engine::EngineError;
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoordinatorError {
    #[error("Cannot {command} while a sort is running")]
    RunInProgress { command: String },

    #[error("Unknown sorting algorithm: {id}")]
    UnknownAlgorithm { id: String },

    #[error("Array size {size} outside allowed range {min}..={max}")]
    InvalidSize { size: usize, min: usize, max: usize },

    #[error("Sort engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),

    #[error("Run task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl CoordinatorError {
    pub fn run_in_progress(command: impl Into<String>) -> Self {
        Self::RunInProgress { command: command.into() }
    }
}

pub type CoordinatorResult<T> = Result<T, CoordinatorError>;
