use crate::emitter::StepEmitter;
use crate::error::EngineResult;
use crate::traits::StepSink;

/// Minimum-selection; emits only when the minimum was not already in place.
pub async fn selection_sort<S: StepSink>(input: &[i64], emitter: &mut StepEmitter<S>) -> EngineResult<Vec<i64>> {
    let mut nums = input.to_vec();
    let len = nums.len();

    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..len {
            if nums[j] < nums[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            nums.swap(i, min_index);
            emitter.emit(&nums).await?;
        }
    }

    Ok(nums)
}
