//! Step-emitting sort engine
//!
//! Eight classic sorting algorithms instrumented for visualization: each one
//! works on a private copy of its input, hands a snapshot of the working
//! array to a [`StepSink`] after every mutation, pauses for the pacing delay,
//! and finally returns the sorted array.

pub mod algorithms;
pub mod emitter;
pub mod error;
pub mod pacing;
pub mod sinks;
pub mod traits;

pub use algorithms::{
    bubble_sort, counting_sort, heap_sort, insertion_sort, merge_sort, quick_sort, radix_sort, selection_sort, sort,
};
pub use emitter::StepEmitter;
pub use error::{EngineError, EngineResult};
pub use pacing::{cancellation, CancelHandle, CancelSignal, Pacer};
pub use sinks::{ChannelSink, CollectingSink};
pub use traits::{MockStepSink, StepSink};
