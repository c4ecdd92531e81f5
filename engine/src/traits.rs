//! Observer seam between the engine and whatever displays its progress

use async_trait::async_trait;
use shared::Snapshot;

use crate::error::EngineResult;

/// Receives every intermediate state a sort routine produces
///
/// The engine never looks at what the sink does with a snapshot. An `Err`
/// aborts the running routine and is returned to its caller unchanged.
#[mockall::automock]
#[async_trait]
pub trait StepSink: Send {
    async fn emit(&mut self, snapshot: Snapshot) -> EngineResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_sink_instantiation() {
        let mut sink = MockStepSink::new();
        sink.expect_emit().times(1).returning(|_| Ok(()));
        sink.emit(Snapshot::new(1, vec![1])).await.unwrap();
    }
}
