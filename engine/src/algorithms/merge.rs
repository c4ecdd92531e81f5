use crate::emitter::StepEmitter;
use crate::error::EngineResult;
use crate::traits::StepSink;

/// Inclusive `(start, mid, end)` bounds of one merge
type MergeRange = (usize, usize, usize);

/// Top-down merge sort; one snapshot per write into the merged range.
///
/// The split phase does not touch the array, so the merges are planned up
/// front in the order the recursive formulation performs them and then run
/// one after another.
pub async fn merge_sort<S: StepSink>(input: &[i64], emitter: &mut StepEmitter<S>) -> EngineResult<Vec<i64>> {
    let mut nums = input.to_vec();
    if nums.len() < 2 {
        return Ok(nums);
    }

    let mut plan = Vec::with_capacity(nums.len());
    plan_merges(0, nums.len() - 1, &mut plan);

    for (start, mid, end) in plan {
        merge(&mut nums, start, mid, end, emitter).await?;
    }

    Ok(nums)
}

/// Post-order walk of the split tree: left half, right half, then the merge of both
fn plan_merges(start: usize, end: usize, plan: &mut Vec<MergeRange>) {
    if start < end {
        let mid = start + (end - start) / 2;
        plan_merges(start, mid, plan);
        plan_merges(mid + 1, end, plan);
        plan.push((start, mid, end));
    }
}

async fn merge<S: StepSink>(
    nums: &mut [i64],
    start: usize,
    mid: usize,
    end: usize,
    emitter: &mut StepEmitter<S>,
) -> EngineResult<()> {
    let left = nums[start..=mid].to_vec();
    let right = nums[mid + 1..=end].to_vec();
    let (mut i, mut j, mut k) = (0, 0, start);

    while i < left.len() && j < right.len() {
        // `<=` keeps equal values in their original order
        if left[i] <= right[j] {
            nums[k] = left[i];
            i += 1;
        } else {
            nums[k] = right[j];
            j += 1;
        }
        emitter.emit(nums).await?;
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        nums[k] = value;
        emitter.emit(nums).await?;
        k += 1;
    }

    Ok(())
}
