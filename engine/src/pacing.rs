//! Visualization cadence and cooperative cancellation
//!
//! Every snapshot is followed by one pause. The pause is the only place a
//! routine yields, so it is also the only place cancellation is observed.

use std::time::Duration;

use tokio::sync::watch;

use crate::error::{EngineError, EngineResult};

/// Create a linked cancel handle / signal pair
pub fn cancellation() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle(tx), CancelSignal(rx))
}

/// Owner side: flips the flag observed by every cloned `CancelSignal`
#[derive(Debug)]
pub struct CancelHandle(watch::Sender<bool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    pub fn signal(&self) -> CancelSignal {
        CancelSignal(self.0.subscribe())
    }
}

/// Routine side of the cancellation flag
#[derive(Debug, Clone)]
pub struct CancelSignal(watch::Receiver<bool>);

impl CancelSignal {
    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    /// Resolves once cancellation is requested; never resolves if the handle is dropped first
    pub async fn cancelled(&mut self) {
        loop {
            let cancelled = *self.0.borrow_and_update();
            if cancelled {
                return;
            }
            if self.0.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

/// Fixed pause after each snapshot, optionally interruptible
#[derive(Debug, Clone)]
pub struct Pacer {
    delay: Duration,
    cancel: Option<CancelSignal>,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, cancel: None }
    }

    /// No pause at all; snapshots are emitted back to back
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn with_cancel(mut self, signal: CancelSignal) -> Self {
        self.cancel = Some(signal);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the pacing delay, failing with `Cancelled` if cancellation is
    /// already requested or arrives while waiting
    pub async fn pause(&mut self) -> EngineResult<()> {
        if self.cancel.as_ref().is_some_and(CancelSignal::is_cancelled) {
            return Err(EngineError::Cancelled);
        }
        if self.delay.is_zero() {
            return Ok(());
        }

        match self.cancel.as_mut() {
            Some(signal) => {
                tokio::select! {
                    _ = tokio::time::sleep(self.delay) => Ok(()),
                    _ = signal.cancelled() => Err(EngineError::Cancelled),
                }
            }
            None => {
                tokio::time::sleep(self.delay).await;
                Ok(())
            }
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(Duration::from_millis(shared::config::DEFAULT_PACING_MS))
    }
}
