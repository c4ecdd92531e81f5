//! Run coordinator
//!
//! Owns the current array, the selected algorithm and the single run
//! session, and turns display commands into engine invocations. At most one
//! sort runs at a time; `start` while a run is active changes nothing.

use std::sync::Arc;

use chrono::Utc;
use engine::{cancellation, CancelSignal, EngineError, Pacer, StepEmitter};
use shared::{
    run_debug, run_error, run_info, run_warn, AlgorithmDescriptor, AlgorithmId, CoordinatorEvent, RunId,
    RunOutcome, RunReport, RunStatus, VisualizerConfig, ALGORITHMS,
};
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::{CoordinatorError, CoordinatorResult};
use crate::services::PublishingSink;
use crate::state::CoordinatorState;
use crate::traits::ArrayGenerator;

/// Buffered events per subscriber before it starts lagging
const EVENT_CAPACITY: usize = 1024;

/// Result of a `start` command
#[derive(Debug)]
pub enum StartOutcome {
    Started(RunHandle),
    /// A run was already active; nothing changed
    AlreadyRunning,
}

impl StartOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, StartOutcome::Started(_))
    }

    pub fn into_handle(self) -> Option<RunHandle> {
        match self {
            StartOutcome::Started(handle) => Some(handle),
            StartOutcome::AlreadyRunning => None,
        }
    }
}

/// Handle to a spawned run
#[derive(Debug)]
pub struct RunHandle {
    run_id: RunId,
    algorithm: AlgorithmId,
    task: JoinHandle<RunReport>,
}

impl RunHandle {
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Wait for the run to finish and return its report
    pub async fn wait(self) -> CoordinatorResult<RunReport> {
        Ok(self.task.await?)
    }
}

struct Inner<G> {
    config: VisualizerConfig,
    generator: G,
    state: Arc<Mutex<CoordinatorState>>,
    events: broadcast::Sender<CoordinatorEvent>,
}

impl<G> Inner<G> {
    fn publish(&self, event: CoordinatorEvent) {
        debug!(kind = event.kind(), "publishing event");
        // Sending with no subscribers is not an error for the coordinator
        let _ = self.events.send(event);
    }
}

/// Single-flight sort coordinator
///
/// Cloning is cheap and every clone drives the same state.
pub struct Coordinator<G>
where
    G: ArrayGenerator + 'static,
{
    inner: Arc<Inner<G>>,
}

impl<G> Clone for Coordinator<G>
where
    G: ArrayGenerator + 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G> Coordinator<G>
where
    G: ArrayGenerator + 'static,
{
    /// Create a coordinator with a freshly generated array of the default size
    pub fn new(config: VisualizerConfig, generator: G) -> CoordinatorResult<Self> {
        config.validate()?;
        let initial = generator.generate(config.default_size, config.value_min, config.value_max);
        let state = CoordinatorState::new(initial, ALGORITHMS[0].id);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                generator,
                state: Arc::new(Mutex::new(state)),
                events,
            }),
        })
    }

    /// Replace the current array with `size` random values
    pub async fn generate(&self, size: usize) -> CoordinatorResult<Vec<i64>> {
        let mut state = self.inner.state.lock().await;
        if state.is_running() {
            return Err(CoordinatorError::run_in_progress("generate"));
        }
        self.generate_locked(&mut state, size)
    }

    /// Replace the current array with new values at the last-used size
    pub async fn regenerate(&self) -> CoordinatorResult<Vec<i64>> {
        let mut state = self.inner.state.lock().await;
        if state.is_running() {
            return Err(CoordinatorError::run_in_progress("regenerate"));
        }
        let size = state.size;
        self.generate_locked(&mut state, size)
    }

    fn generate_locked(&self, state: &mut CoordinatorState, size: usize) -> CoordinatorResult<Vec<i64>> {
        let config = &self.inner.config;
        if !config.size_in_range(size) {
            return Err(CoordinatorError::InvalidSize {
                size,
                min: config.min_size,
                max: config.max_size,
            });
        }

        let values = self.inner.generator.generate(size, config.value_min, config.value_max);
        debug!(size, "generated new array");
        state.current = values.clone();
        state.size = size;
        self.inner.publish(CoordinatorEvent::Generated { values: values.clone() });
        Ok(values)
    }

    /// Bind the algorithm used by the next `start`
    ///
    /// Unknown ids are logged and rejected without touching state.
    pub async fn select_algorithm(&self, id: &str) -> CoordinatorResult<&'static AlgorithmDescriptor> {
        let algorithm: AlgorithmId = match id.parse() {
            Ok(algorithm) => algorithm,
            Err(_) => {
                warn!(id, "⚠️ Unknown sorting algorithm requested");
                return Err(CoordinatorError::UnknownAlgorithm { id: id.to_string() });
            }
        };

        let mut state = self.inner.state.lock().await;
        if state.is_running() {
            return Err(CoordinatorError::run_in_progress("select algorithm"));
        }
        state.selected = algorithm;
        self.inner.publish(CoordinatorEvent::AlgorithmSelected { id: algorithm });
        Ok(algorithm.descriptor())
    }

    /// Start sorting a copy of the current array with the selected algorithm
    ///
    /// The run proceeds on its own task; the returned handle resolves to the
    /// run's report. Returns `AlreadyRunning` if a run is active.
    pub async fn start(&self) -> CoordinatorResult<StartOutcome> {
        let mut state = self.inner.state.lock().await;
        if let Some(active) = state.session() {
            run_debug!(active.id, "Start ignored, run already active");
            return Ok(StartOutcome::AlreadyRunning);
        }

        let (cancel, signal) = cancellation();
        let Some(session) = state.begin_run(cancel) else {
            return Ok(StartOutcome::AlreadyRunning);
        };
        let run_id = session.id;
        let algorithm = session.algorithm;
        let source = session.source.clone();

        run_info!(run_id, "▶️ Starting {} on {} values", algorithm, source.len());
        self.inner.publish(CoordinatorEvent::StatusChanged {
            status: RunStatus::Running,
        });
        drop(state);

        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(Self::execute(inner, run_id, algorithm, source, signal));

        Ok(StartOutcome::Started(RunHandle {
            run_id,
            algorithm,
            task,
        }))
    }

    /// Ask the active run to stop at its next pause
    ///
    /// Returns `false` when no run is active.
    pub async fn cancel(&self) -> bool {
        let state = self.inner.state.lock().await;
        match state.session() {
            Some(session) => {
                run_warn!(session.id, "⏹️ Cancellation requested");
                session.cancel();
                true
            }
            None => false,
        }
    }

    /// Drive the engine for one run and settle state afterwards
    async fn execute(
        inner: Arc<Inner<G>>,
        run_id: RunId,
        algorithm: AlgorithmId,
        source: Vec<i64>,
        signal: CancelSignal,
    ) -> RunReport {
        let sink = PublishingSink::new(run_id, Arc::clone(&inner.state), inner.events.clone());
        let pacer = Pacer::new(inner.config.pacing).with_cancel(signal);

        // A panicking routine surfaces as a JoinError instead of wedging the session
        let engine_task = tokio::spawn(async move {
            let mut emitter = StepEmitter::new(sink, pacer);
            engine::sort(algorithm, &source, &mut emitter).await
        });
        let result: CoordinatorResult<Vec<i64>> = match engine_task.await {
            Ok(result) => result.map_err(CoordinatorError::from),
            Err(join_error) => Err(CoordinatorError::from(join_error)),
        };

        let mut state = inner.state.lock().await;
        let outcome = match result {
            Ok(sorted) => {
                state.current = sorted;
                RunOutcome::Completed
            }
            Err(CoordinatorError::Engine(EngineError::Cancelled)) => RunOutcome::Cancelled,
            Err(error) => {
                run_error!(run_id, "❌ {} sort failed: {}", algorithm, error);
                RunOutcome::Failed {
                    reason: error.to_string(),
                }
            }
        };

        let (steps, started_at) = match state.end_run(run_id) {
            Some(session) => (session.steps, session.started_at),
            None => (0, Utc::now()),
        };
        let report = RunReport {
            run_id,
            algorithm,
            steps,
            outcome,
            values: state.current.clone(),
            started_at,
            finished_at: Utc::now(),
        };

        run_info!(
            run_id,
            "🏁 {} finished: {:?} after {} steps in {}ms",
            algorithm,
            report.outcome,
            report.steps,
            report.duration_ms()
        );
        inner.publish(CoordinatorEvent::StatusChanged { status: RunStatus::Idle });
        inner.publish(CoordinatorEvent::RunFinished { report: report.clone() });
        report
    }

    /// Copy of the array a display should currently show
    pub async fn current_array(&self) -> Vec<i64> {
        self.inner.state.lock().await.current.clone()
    }

    pub async fn selected(&self) -> &'static AlgorithmDescriptor {
        self.inner.state.lock().await.selected.descriptor()
    }

    pub async fn status(&self) -> RunStatus {
        self.inner.state.lock().await.status()
    }

    /// Size used by the last `generate`
    pub async fn size(&self) -> usize {
        self.inner.state.lock().await.size
    }

    /// Subscribe to snapshots, status changes and run completions
    ///
    /// A subscriber that falls more than the channel capacity behind receives
    /// `RecvError::Lagged` and skips ahead.
    pub fn subscribe(&self) -> broadcast::Receiver<CoordinatorEvent> {
        self.inner.events.subscribe()
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.inner.config
    }

    /// Every selectable algorithm, in picker order
    pub fn algorithms(&self) -> &'static [AlgorithmDescriptor] {
        &ALGORITHMS
    }
}
