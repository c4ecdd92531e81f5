//! Shared types for the sorting visualizer
//!
//! Holds the algorithm catalog, snapshot and status types, the outbound event
//! messages, configuration and tracing setup used by both the engine and the
//! coordinator.

pub mod config;
pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use config::VisualizerConfig;
pub use errors::*;
pub use types::*;

pub use messages::{CoordinatorEvent, RunOutcome, RunReport};
