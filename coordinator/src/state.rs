//! Coordinator-owned state
//!
//! The current array is the only state shared with display consumers. It is
//! written by `generate` while idle and by the active run's sink otherwise.

use chrono::{DateTime, Utc};
use engine::CancelHandle;
use shared::{AlgorithmId, RunId, RunStatus};

/// Transient record of the run in flight
#[derive(Debug)]
pub struct RunSession {
    pub id: RunId,
    pub algorithm: AlgorithmId,
    /// Copy of the current array taken when the run started
    pub source: Vec<i64>,
    pub started_at: DateTime<Utc>,
    /// Snapshots published so far
    pub steps: u64,
    cancel: CancelHandle,
}

impl RunSession {
    pub fn new(algorithm: AlgorithmId, source: Vec<i64>, cancel: CancelHandle) -> Self {
        Self {
            id: RunId::new(),
            algorithm,
            source,
            started_at: Utc::now(),
            steps: 0,
            cancel,
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancel_requested(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Everything the coordinator mediates
#[derive(Debug)]
pub struct CoordinatorState {
    pub current: Vec<i64>,
    pub selected: AlgorithmId,
    /// Size used by the last `generate`, reused by `regenerate`
    pub size: usize,
    session: Option<RunSession>,
}

impl CoordinatorState {
    pub fn new(current: Vec<i64>, selected: AlgorithmId) -> Self {
        let size = current.len();
        Self {
            current,
            selected,
            size,
            session: None,
        }
    }

    pub fn status(&self) -> RunStatus {
        if self.session.is_some() {
            RunStatus::Running
        } else {
            RunStatus::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&RunSession> {
        self.session.as_ref()
    }

    /// Open a session over a copy of the current array
    ///
    /// Returns `None` if a session is already active.
    pub fn begin_run(&mut self, cancel: CancelHandle) -> Option<&RunSession> {
        if self.session.is_some() {
            return None;
        }
        self.session = Some(RunSession::new(self.selected, self.current.clone(), cancel));
        self.session.as_ref()
    }

    /// Publish one snapshot of `run_id` as the current array
    ///
    /// Snapshots from a run that is no longer active are ignored.
    pub fn record_step(&mut self, run_id: RunId, values: &[i64]) -> bool {
        match self.session.as_mut() {
            Some(session) if session.id == run_id => {
                session.steps += 1;
                self.current.clear();
                self.current.extend_from_slice(values);
                true
            }
            _ => false,
        }
    }

    /// Close the session, returning it for reporting
    pub fn end_run(&mut self, run_id: RunId) -> Option<RunSession> {
        if self.session.as_ref().is_some_and(|session| session.id == run_id) {
            self.session.take()
        } else {
            None
        }
    }
}
