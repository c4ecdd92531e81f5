use crate::emitter::StepEmitter;
use crate::error::EngineResult;
use crate::traits::StepSink;

/// Shifts larger values right one slot at a time, emitting after every shift
/// and once more when the held value is dropped into its slot.
pub async fn insertion_sort<S: StepSink>(input: &[i64], emitter: &mut StepEmitter<S>) -> EngineResult<Vec<i64>> {
    let mut nums = input.to_vec();

    for i in 1..nums.len() {
        let current = nums[i];
        // Slot the held value will land in
        let mut hole = i;

        while hole > 0 && nums[hole - 1] > current {
            nums[hole] = nums[hole - 1];
            emitter.emit(&nums).await?;
            hole -= 1;
        }
        nums[hole] = current;
        emitter.emit(&nums).await?;
    }

    Ok(nums)
}
