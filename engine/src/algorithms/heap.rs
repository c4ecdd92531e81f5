use crate::emitter::StepEmitter;
use crate::error::EngineResult;
use crate::traits::StepSink;

/// In-place heap sort; one snapshot per swap, heap construction included.
pub async fn heap_sort<S: StepSink>(input: &[i64], emitter: &mut StepEmitter<S>) -> EngineResult<Vec<i64>> {
    let mut nums = input.to_vec();
    let len = nums.len();

    for root in (0..len / 2).rev() {
        sift_down(&mut nums, len, root, emitter).await?;
    }

    for end in (1..len).rev() {
        nums.swap(0, end);
        emitter.emit(&nums).await?;
        sift_down(&mut nums, end, 0, emitter).await?;
    }

    Ok(nums)
}

/// Restore the max-heap property below `root` within `nums[..size]`
async fn sift_down<S: StepSink>(
    nums: &mut [i64],
    size: usize,
    mut root: usize,
    emitter: &mut StepEmitter<S>,
) -> EngineResult<()> {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < size && nums[left] > nums[largest] {
            largest = left;
        }
        if right < size && nums[right] > nums[largest] {
            largest = right;
        }
        if largest == root {
            return Ok(());
        }

        nums.swap(root, largest);
        emitter.emit(nums).await?;
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::CollectingSink;

    #[tokio::test]
    async fn test_heap_build_and_extract_sequence() {
        let mut emitter = StepEmitter::immediate(CollectingSink::new());
        let sorted = heap_sort(&[1, 3, 2], &mut emitter).await.unwrap();

        let states: Vec<Vec<i64>> = emitter.into_sink().into_snapshots().into_iter().map(|s| s.values).collect();
        assert_eq!(
            states,
            vec![
                // build: 3 rises to the root
                vec![3, 1, 2],
                // extract 3; [2, 1] is already a heap
                vec![2, 1, 3],
                // extract 2
                vec![1, 2, 3],
            ]
        );
        assert_eq!(sorted, vec![1, 2, 3]);
    }
}
