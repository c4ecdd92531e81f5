//! Coordinator → display events

use serde::{Deserialize, Serialize};

use super::run::RunReport;
use crate::types::{AlgorithmId, RunId, RunStatus, Snapshot};

/// Everything a display layer needs to mirror coordinator state
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CoordinatorEvent {
    /// A freshly generated array replaced the current one
    Generated { values: Vec<i64> },

    AlgorithmSelected { id: AlgorithmId },

    /// Controls should be enabled (idle) or disabled (running)
    StatusChanged { status: RunStatus },

    /// One intermediate state of the active run
    Step { run_id: RunId, snapshot: Snapshot },

    RunFinished { report: RunReport },
}

impl CoordinatorEvent {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            CoordinatorEvent::Generated { .. } => "generated",
            CoordinatorEvent::AlgorithmSelected { .. } => "algorithm_selected",
            CoordinatorEvent::StatusChanged { .. } => "status_changed",
            CoordinatorEvent::Step { .. } => "step",
            CoordinatorEvent::RunFinished { .. } => "run_finished",
        }
    }
}
