use shared::AlgorithmId;

use super::require_non_negative;
use crate::emitter::StepEmitter;
use crate::error::EngineResult;
use crate::traits::StepSink;

const RADIX: i64 = 10;

/// LSD radix sort in base 10 over non-negative values.
///
/// Each digit pass is a stable counting sort into a scratch buffer; the
/// buffer is then written back element by element, one snapshot per write.
/// Passes stop once the largest value has no digit left at the current place.
pub async fn radix_sort<S: StepSink>(input: &[i64], emitter: &mut StepEmitter<S>) -> EngineResult<Vec<i64>> {
    require_non_negative(AlgorithmId::Radix, input)?;
    let mut nums = input.to_vec();
    if nums.len() < 2 {
        return Ok(nums);
    }

    let max = nums.iter().copied().max().unwrap_or(0);
    let mut place: i64 = 1;
    while max / place > 0 {
        sort_by_digit(&mut nums, place, emitter).await?;
        place = match place.checked_mul(RADIX) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(nums)
}

async fn sort_by_digit<S: StepSink>(nums: &mut [i64], place: i64, emitter: &mut StepEmitter<S>) -> EngineResult<()> {
    let digit = |value: i64| ((value / place) % RADIX) as usize;

    let mut counts = [0usize; RADIX as usize];
    for &value in nums.iter() {
        counts[digit(value)] += 1;
    }
    for d in 1..counts.len() {
        counts[d] += counts[d - 1];
    }

    let mut result = vec![0i64; nums.len()];
    for &value in nums.iter().rev() {
        let slot = &mut counts[digit(value)];
        *slot -= 1;
        result[*slot] = value;
    }

    for (i, value) in result.into_iter().enumerate() {
        nums[i] = value;
        emitter.emit(nums).await?;
    }

    Ok(())
}
