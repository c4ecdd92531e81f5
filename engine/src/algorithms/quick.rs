use crate::emitter::StepEmitter;
use crate::error::EngineResult;
use crate::traits::StepSink;

/// Lomuto quick sort with the last element of each range as pivot.
///
/// Emits on every partition swap (including a value swapped with itself) and
/// once for the pivot's final placement. Ranges are processed depth-first,
/// left side before right, through an explicit stack.
pub async fn quick_sort<S: StepSink>(input: &[i64], emitter: &mut StepEmitter<S>) -> EngineResult<Vec<i64>> {
    let mut nums = input.to_vec();
    if nums.len() < 2 {
        return Ok(nums);
    }

    let mut pending = vec![(0usize, nums.len() - 1)];
    while let Some((start, end)) = pending.pop() {
        if start >= end {
            continue;
        }
        let pivot_index = partition(&mut nums, start, end, emitter).await?;

        // Right pushed first so the left range is popped next
        pending.push((pivot_index + 1, end));
        if pivot_index > start {
            pending.push((start, pivot_index - 1));
        }
    }

    Ok(nums)
}

async fn partition<S: StepSink>(
    nums: &mut [i64],
    start: usize,
    end: usize,
    emitter: &mut StepEmitter<S>,
) -> EngineResult<usize> {
    let pivot = nums[end];
    // Next slot for a value smaller than the pivot
    let mut store = start;

    for j in start..end {
        if nums[j] < pivot {
            nums.swap(store, j);
            emitter.emit(nums).await?;
            store += 1;
        }
    }
    nums.swap(store, end);
    emitter.emit(nums).await?;

    Ok(store)
}
