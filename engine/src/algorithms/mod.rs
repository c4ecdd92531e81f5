//! The eight step-emitting sort routines
//!
//! Every routine sorts a private copy of its input, emits the working array
//! after each mutation through the supplied [`StepEmitter`], and returns the
//! sorted copy. Inputs of length 0 or 1 return immediately without emitting.

pub mod bubble;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;

pub use bubble::bubble_sort;
pub use counting::counting_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use radix::radix_sort;
pub use selection::selection_sort;

use shared::AlgorithmId;
use tracing::debug;

use crate::emitter::StepEmitter;
use crate::error::{EngineError, EngineResult};
use crate::traits::StepSink;

/// Run the routine bound to `algorithm`
pub async fn sort<S: StepSink>(
    algorithm: AlgorithmId,
    input: &[i64],
    emitter: &mut StepEmitter<S>,
) -> EngineResult<Vec<i64>> {
    debug!(%algorithm, len = input.len(), "running sort routine");
    let sorted = match algorithm {
        AlgorithmId::Bubble => bubble_sort(input, emitter).await?,
        AlgorithmId::Selection => selection_sort(input, emitter).await?,
        AlgorithmId::Insertion => insertion_sort(input, emitter).await?,
        AlgorithmId::Merge => merge_sort(input, emitter).await?,
        AlgorithmId::Quick => quick_sort(input, emitter).await?,
        AlgorithmId::Heap => heap_sort(input, emitter).await?,
        AlgorithmId::Counting => counting_sort(input, emitter).await?,
        AlgorithmId::Radix => radix_sort(input, emitter).await?,
    };
    debug!(%algorithm, steps = emitter.steps(), "sort routine finished");
    Ok(sorted)
}

/// Reject negative values for routines that index by value
pub(crate) fn require_non_negative(algorithm: AlgorithmId, input: &[i64]) -> EngineResult<()> {
    match input.iter().position(|&value| value < 0) {
        Some(index) => Err(EngineError::NegativeValue {
            algorithm,
            index,
            value: input[index],
        }),
        None => Ok(()),
    }
}
