//! Snapshot emission shared by every sort routine

use shared::Snapshot;
use tracing::trace;

use crate::error::EngineResult;
use crate::pacing::Pacer;
use crate::traits::StepSink;

/// Copies the working array into snapshots, forwards them and paces the run
pub struct StepEmitter<S> {
    sink: S,
    pacer: Pacer,
    steps: u64,
}

impl<S: StepSink> StepEmitter<S> {
    pub fn new(sink: S, pacer: Pacer) -> Self {
        Self { sink, pacer, steps: 0 }
    }

    /// Emitter with no pacing delay and no cancellation
    pub fn immediate(sink: S) -> Self {
        Self::new(sink, Pacer::immediate())
    }

    /// Publish the current working state, then suspend for the pacing delay
    pub async fn emit(&mut self, working: &[i64]) -> EngineResult<()> {
        self.steps += 1;
        trace!(step = self.steps, len = working.len(), "emitting snapshot");
        self.sink.emit(Snapshot::new(self.steps, working.to_vec())).await?;
        self.pacer.pause().await
    }

    /// Number of snapshots emitted so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
