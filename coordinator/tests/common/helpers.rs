//! Builders and helpers for coordinator tests

use std::time::Duration;

use coordinator::{Coordinator, MockArrayGenerator, RandomArrayGenerator};
use shared::{CoordinatorEvent, RunReport, VisualizerConfig};
use tokio::sync::broadcast;

/// Builder for coordinators backed by a scripted generator
pub struct CoordinatorBuilder {
    config: VisualizerConfig,
    values: Option<Vec<i64>>,
}

#[allow(dead_code)]
impl CoordinatorBuilder {
    /// Defaults: stock config with no pacing, generator yields `1..=size` reversed
    pub fn new() -> Self {
        Self {
            config: VisualizerConfig::default().with_pacing(Duration::ZERO),
            values: None,
        }
    }

    /// Every `generate` call returns exactly these values
    pub fn with_values(mut self, values: Vec<i64>) -> Self {
        self.values = Some(values);
        self
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.config.pacing = pacing;
        self
    }

    pub fn with_config(mut self, config: VisualizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Coordinator<MockArrayGenerator> {
        let mut generator = MockArrayGenerator::new();
        match self.values {
            Some(values) => {
                generator
                    .expect_generate()
                    .returning(move |_, _, _| values.clone())
                    .times(0..);
            }
            None => {
                generator
                    .expect_generate()
                    .returning(|size, _, _| (1..=size as i64).rev().collect())
                    .times(0..);
            }
        }
        Coordinator::new(self.config, generator).expect("valid test config")
    }

    /// Coordinator with the production random generator
    pub fn build_random(self) -> Coordinator<RandomArrayGenerator> {
        Coordinator::new(self.config, RandomArrayGenerator::new()).expect("valid test config")
    }
}

pub struct TestHelpers;

#[allow(dead_code)]
impl TestHelpers {
    /// Drain events until the run finishes, returning every event seen
    pub async fn collect_run(rx: &mut broadcast::Receiver<CoordinatorEvent>) -> Vec<CoordinatorEvent> {
        let mut events = Vec::new();
        loop {
            let event = tokio::time::timeout(Duration::from_secs(10), rx.recv())
                .await
                .expect("run should finish")
                .expect("event channel open");
            let finished = matches!(event, CoordinatorEvent::RunFinished { .. });
            events.push(event);
            if finished {
                return events;
            }
        }
    }

    /// Values of every `Step` event, in order
    pub fn step_values(events: &[CoordinatorEvent]) -> Vec<Vec<i64>> {
        events
            .iter()
            .filter_map(|event| match event {
                CoordinatorEvent::Step { snapshot, .. } => Some(snapshot.values.clone()),
                _ => None,
            })
            .collect()
    }

    /// Step numbers of every `Step` event, in order
    pub fn step_numbers(events: &[CoordinatorEvent]) -> Vec<u64> {
        events
            .iter()
            .filter_map(|event| match event {
                CoordinatorEvent::Step { snapshot, .. } => Some(snapshot.step),
                _ => None,
            })
            .collect()
    }

    pub fn report(events: &[CoordinatorEvent]) -> RunReport {
        match events.last() {
            Some(CoordinatorEvent::RunFinished { report }) => report.clone(),
            other => panic!("expected RunFinished as last event, got {other:?}"),
        }
    }

    /// Wait until the receiver has seen `count` step events
    pub async fn wait_for_steps(rx: &mut broadcast::Receiver<CoordinatorEvent>, count: usize) -> Vec<i64> {
        let mut seen = 0;
        loop {
            let event = tokio::time::timeout(Duration::from_secs(10), rx.recv())
                .await
                .expect("steps should arrive")
                .expect("event channel open");
            if let CoordinatorEvent::Step { snapshot, .. } = event {
                seen += 1;
                if seen == count {
                    return snapshot.values;
                }
            }
        }
    }
}
