//! Message types flowing from the coordinator to display consumers
//!
//! - `run`: per-run outcome reporting
//! - `events`: the outbound event stream (snapshots, status, completion)

pub mod events;
pub mod run;

pub use events::CoordinatorEvent;
pub use run::{RunOutcome, RunReport};
