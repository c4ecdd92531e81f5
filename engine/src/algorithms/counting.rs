use shared::AlgorithmId;

use super::require_non_negative;
use crate::emitter::StepEmitter;
use crate::error::{EngineError, EngineResult};
use crate::traits::StepSink;

/// Largest value counting sort will build a frequency table for
pub const MAX_COUNTING_VALUE: i64 = 1 << 24;

/// Stable counting sort over non-negative values.
///
/// Values are dropped into a result buffer from the back of the input
/// forward; each placement emits the buffer, with `0` standing in for slots
/// not yet filled. The buffer becomes the returned array.
pub async fn counting_sort<S: StepSink>(input: &[i64], emitter: &mut StepEmitter<S>) -> EngineResult<Vec<i64>> {
    require_non_negative(AlgorithmId::Counting, input)?;
    let nums = input.to_vec();
    if nums.len() < 2 {
        return Ok(nums);
    }

    let max = nums.iter().copied().max().unwrap_or(0);
    if max > MAX_COUNTING_VALUE {
        return Err(EngineError::ValueTooLarge {
            algorithm: AlgorithmId::Counting,
            value: max,
            limit: MAX_COUNTING_VALUE,
        });
    }

    let mut counts = vec![0usize; max as usize + 1];
    for &value in &nums {
        counts[value as usize] += 1;
    }
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    let mut result = vec![0i64; nums.len()];
    for &value in nums.iter().rev() {
        let slot = &mut counts[value as usize];
        *slot -= 1;
        result[*slot] = value;
        emitter.emit(&result).await?;
    }

    Ok(result)
}
