use crate::emitter::StepEmitter;
use crate::error::EngineResult;
use crate::traits::StepSink;

/// Adjacent-pair passes; one snapshot per swap. Runs every pass without an early exit.
pub async fn bubble_sort<S: StepSink>(input: &[i64], emitter: &mut StepEmitter<S>) -> EngineResult<Vec<i64>> {
    let mut nums = input.to_vec();
    let len = nums.len();

    for pass in 0..len.saturating_sub(1) {
        for j in 0..len - pass - 1 {
            if nums[j] > nums[j + 1] {
                nums.swap(j, j + 1);
                emitter.emit(&nums).await?;
            }
        }
    }

    Ok(nums)
}
