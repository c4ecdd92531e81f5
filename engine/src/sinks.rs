//! Ready-made step sinks

use async_trait::async_trait;
use shared::Snapshot;
use tokio::sync::mpsc;

use crate::error::{EngineError, EngineResult};
use crate::traits::StepSink;

/// Records every snapshot in memory
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    snapshots: Vec<Snapshot>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }
}

#[async_trait]
impl StepSink for CollectingSink {
    async fn emit(&mut self, snapshot: Snapshot) -> EngineResult<()> {
        self.snapshots.push(snapshot);
        Ok(())
    }
}

/// Forwards snapshots into a bounded channel
///
/// Backpressure from a slow consumer stretches the run; a closed receiver
/// fails the run with `EngineError::Sink`.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<Snapshot>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<Snapshot>) -> Self {
        Self { tx }
    }

    /// Create a sink together with the receiving end
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Snapshot>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl StepSink for ChannelSink {
    async fn emit(&mut self, snapshot: Snapshot) -> EngineResult<()> {
        self.tx.send(snapshot).await.map_err(|_| EngineError::Sink {
            message: "snapshot receiver closed".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_collecting_sink_keeps_order() {
        let mut sink = CollectingSink::new();
        sink.emit(Snapshot::new(1, vec![2, 1])).await.unwrap();
        sink.emit(Snapshot::new(2, vec![1, 2])).await.unwrap();
        assert_eq!(sink.snapshots().len(), 2);
        assert_eq!(sink.last().map(|s| s.step), Some(2));
    }

    #[tokio::test]
    async fn test_channel_sink_forwards() {
        let (mut sink, mut rx) = ChannelSink::channel(4);
        sink.emit(Snapshot::new(1, vec![7])).await.unwrap();
        assert_eq!(rx.recv().await, Some(Snapshot::new(1, vec![7])));
    }

    #[tokio::test]
    async fn test_channel_sink_fails_when_receiver_dropped() {
        let (mut sink, rx) = ChannelSink::channel(1);
        drop(rx);
        let err = sink.emit(Snapshot::new(1, vec![])).await.unwrap_err();
        assert!(matches!(err, EngineError::Sink { .. }));
    }
}
