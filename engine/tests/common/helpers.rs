//! Helpers for running routines and checking their output

use async_trait::async_trait;
use engine::{EngineResult, Pacer, StepEmitter, StepSink};
use shared::{AlgorithmId, Snapshot};

/// Sink that checks per-snapshot invariants instead of storing every state
#[derive(Debug)]
pub struct InvariantSink {
    expected_len: usize,
    pub count: u64,
    pub last: Option<Vec<i64>>,
}

impl InvariantSink {
    pub fn new(expected_len: usize) -> Self {
        Self {
            expected_len,
            count: 0,
            last: None,
        }
    }
}

#[async_trait]
impl StepSink for InvariantSink {
    async fn emit(&mut self, snapshot: Snapshot) -> EngineResult<()> {
        self.count += 1;
        assert_eq!(snapshot.step, self.count, "snapshots must be numbered in emission order");
        assert_eq!(snapshot.len(), self.expected_len, "snapshot length must match input length");
        self.last = Some(snapshot.values);
        Ok(())
    }
}

pub struct TestHelpers;

#[allow(dead_code)]
impl TestHelpers {
    /// Run one algorithm with no pacing and return the result with the checking sink
    pub async fn run(algorithm: AlgorithmId, input: &[i64]) -> (EngineResult<Vec<i64>>, InvariantSink) {
        let mut emitter = StepEmitter::new(InvariantSink::new(input.len()), Pacer::immediate());
        let result = engine::sort(algorithm, input, &mut emitter).await;
        (result, emitter.into_sink())
    }

    pub fn is_sorted(values: &[i64]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn same_multiset(a: &[i64], b: &[i64]) -> bool {
        let mut a = a.to_vec();
        let mut b = b.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}
