//! Run coordinator for the sorting visualizer
//!
//! Mediates between a display layer and the sort engine: it owns the current
//! array and the selected algorithm, runs at most one sort at a time, and
//! republishes every snapshot as an event for display consumers.

pub mod coordinator;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;

// Re-export commonly used types
pub use coordinator::{Coordinator, RunHandle, StartOutcome};
pub use error::{CoordinatorError, CoordinatorResult};
pub use services::{PublishingSink, RandomArrayGenerator};
pub use state::{CoordinatorState, RunSession};
pub use traits::{ArrayGenerator, MockArrayGenerator};
