//! Run outcome types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AlgorithmId, RunId};

/// How a run ended
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunOutcome {
    Completed,
    Failed { reason: String },
    Cancelled,
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed)
    }
}

/// Final record of one run session
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RunReport {
    pub run_id: RunId,
    pub algorithm: AlgorithmId,
    /// Number of snapshots emitted during the run
    pub steps: u64,
    pub outcome: RunOutcome,
    /// Array adopted as current when the run ended
    pub values: Vec<i64>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}
