//! Pacing, cancellation and sink failure behaviour of running routines

mod common;
use common::TestFixtures;

use std::time::{Duration, Instant};

use engine::{cancellation, ChannelSink, CollectingSink, EngineError, MockStepSink, Pacer, StepEmitter};
use shared::AlgorithmId;

#[tokio::test]
async fn test_each_snapshot_is_followed_by_the_pacing_delay() {
    let delay = Duration::from_millis(10);
    let mut emitter = StepEmitter::new(CollectingSink::new(), Pacer::new(delay));

    let started = Instant::now();
    engine::sort(AlgorithmId::Bubble, &[5, 3, 8, 1], &mut emitter).await.unwrap();

    assert_eq!(emitter.steps(), 4);
    assert!(started.elapsed() >= delay * 4);
}

#[tokio::test]
async fn test_cancellation_stops_a_running_sort() {
    let (handle, signal) = cancellation();
    let (sink, mut rx) = ChannelSink::channel(1024);
    let pacer = Pacer::new(Duration::from_millis(5)).with_cancel(signal);
    let input = TestFixtures::reversed(50);

    let task = tokio::spawn(async move {
        let mut emitter = StepEmitter::new(sink, pacer);
        let result = engine::sort(AlgorithmId::Insertion, &input, &mut emitter).await;
        (result, emitter.steps())
    });

    // Let a few steps through, then cancel
    for _ in 0..3 {
        rx.recv().await.expect("run should emit before cancel");
    }
    handle.cancel();

    let (result, steps) = tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .expect("cancelled run should end promptly")
        .unwrap();
    assert_eq!(result, Err(EngineError::Cancelled));
    // reversed(50) needs well over a thousand steps to finish
    assert!(steps < 100, "run kept going after cancel: {steps} steps");
}

#[tokio::test]
async fn test_sink_failure_aborts_mid_run() {
    let mut sink = MockStepSink::new();
    let mut calls = 0;
    sink.expect_emit().returning(move |_| {
        calls += 1;
        if calls == 3 {
            Err(EngineError::Sink {
                message: "renderer detached".to_string(),
            })
        } else {
            Ok(())
        }
    });

    let mut emitter = StepEmitter::immediate(sink);
    let err = engine::sort(AlgorithmId::Selection, &[5, 4, 3, 2, 1, 0], &mut emitter)
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::Sink { .. }));
    assert_eq!(emitter.steps(), 3);
}

/// Two routines on different arrays at the same time do not share state
#[tokio::test]
async fn test_concurrent_routines_are_independent() {
    let first = TestFixtures::random_array(60);
    let second = TestFixtures::random_array(60);

    let run = |algorithm: AlgorithmId, input: Vec<i64>| async move {
        let mut emitter = StepEmitter::new(CollectingSink::new(), Pacer::new(Duration::from_millis(1)));
        let sorted = engine::sort(algorithm, &input, &mut emitter).await.unwrap();
        (input, sorted)
    };

    let (a, b) = tokio::join!(run(AlgorithmId::Merge, first), run(AlgorithmId::Heap, second));

    for (input, sorted) in [a, b] {
        let mut expected = input.clone();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }
}

#[test]
fn test_immediate_emitter_runs_on_a_bare_executor() {
    let mut emitter = StepEmitter::immediate(CollectingSink::new());
    let sorted = tokio_test::block_on(engine::sort(AlgorithmId::Quick, &[2, 3, 1], &mut emitter));

    assert_eq!(tokio_test::assert_ok!(sorted), vec![1, 2, 3]);
    assert_eq!(emitter.into_sink().into_snapshots().last().map(|s| s.values.clone()), Some(vec![1, 2, 3]));
}
