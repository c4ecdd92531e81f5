//! Step sink that republishes snapshots as the coordinator's current array

use std::sync::Arc;

use async_trait::async_trait;
use engine::{EngineError, EngineResult, StepSink};
use shared::{CoordinatorEvent, RunId, Snapshot};
use tokio::sync::{broadcast, Mutex};
use tracing::trace;

use crate::state::CoordinatorState;

/// Writes each snapshot into the shared state and broadcasts it
pub struct PublishingSink {
    run_id: RunId,
    state: Arc<Mutex<CoordinatorState>>,
    events: broadcast::Sender<CoordinatorEvent>,
}

impl PublishingSink {
    pub fn new(
        run_id: RunId,
        state: Arc<Mutex<CoordinatorState>>,
        events: broadcast::Sender<CoordinatorEvent>,
    ) -> Self {
        Self { run_id, state, events }
    }
}

#[async_trait]
impl StepSink for PublishingSink {
    async fn emit(&mut self, snapshot: Snapshot) -> EngineResult<()> {
        let mut state = self.state.lock().await;
        if !state.record_step(self.run_id, &snapshot.values) {
            return Err(EngineError::Sink {
                message: format!("run {} is no longer active", self.run_id),
            });
        }
        trace!(run = %self.run_id, step = snapshot.step, "published snapshot");

        // No subscribers is fine; the current array is still updated
        let _ = self.events.send(CoordinatorEvent::Step {
            run_id: self.run_id,
            snapshot,
        });
        Ok(())
    }
}
