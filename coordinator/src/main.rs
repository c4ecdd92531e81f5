//! Headless host for the run coordinator
//!
//! Generates one array, runs the chosen algorithm against it and prints every
//! snapshot as a line of values.

use std::time::Duration;

use clap::Parser;
use tokio::signal;
use tokio::sync::broadcast::error::RecvError;

use coordinator::{Coordinator, CoordinatorResult, RandomArrayGenerator, StartOutcome};
use shared::{logging, CoordinatorEvent, VisualizerConfig};

/// Animated sorting algorithm runner
#[derive(Parser)]
#[command(name = "sortviz")]
#[command(about = "Runs a step-by-step sorting algorithm and prints every intermediate state")]
pub struct Args {
    /// Algorithm id (bubble, selection, insertion, merge, quick, heap, counting, radix)
    #[arg(long, default_value = "bubble")]
    pub algorithm: String,

    /// Array size (defaults to SORTVIZ_DEFAULT_SIZE or 10)
    #[arg(long)]
    pub size: Option<usize>,

    /// Pause after each step in milliseconds (defaults to SORTVIZ_PACING_MS or 100)
    #[arg(long)]
    pub pacing_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn render(values: &[i64]) -> String {
    values.iter().map(i64::to_string).collect::<Vec<_>>().join(" ")
}

#[tokio::main]
async fn main() -> CoordinatorResult<()> {
    let args = Args::parse();
    logging::init_tracing_with_level(Some(&args.log_level));

    let mut config = VisualizerConfig::from_env()?;
    if let Some(pacing_ms) = args.pacing_ms {
        config = config.with_pacing(Duration::from_millis(pacing_ms));
    }
    let size = args.size.unwrap_or(config.default_size);

    logging::log_startup("sortviz", &format!("{} sort over {} values", args.algorithm, size));

    let coordinator = Coordinator::new(config, RandomArrayGenerator::new())?;
    let descriptor = coordinator.select_algorithm(&args.algorithm).await?;
    let values = coordinator.generate(size).await?;

    println!("{} ({})", descriptor.name, descriptor.complexity);
    println!("start: {}", render(&values));

    let mut events = coordinator.subscribe();
    let handle = match coordinator.start().await? {
        StartOutcome::Started(handle) => handle,
        StartOutcome::AlreadyRunning => return Ok(()),
    };

    let printer = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(CoordinatorEvent::Step { snapshot, .. }) => {
                    println!("{:>5}: {}", snapshot.step, render(&snapshot.values));
                }
                Ok(CoordinatorEvent::RunFinished { .. }) | Err(RecvError::Closed) => break,
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Display fell behind, skipping snapshots");
                }
            }
        }
    });

    let canceller = coordinator.clone();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown("sortviz", "Received Ctrl+C signal");
                canceller.cancel().await;
            }
            Err(err) => logging::log_error("sortviz", "Signal handling", &err),
        }
    });

    let report = handle.wait().await?;
    let _ = printer.await;

    println!("final: {}", render(&report.values));
    logging::log_success(
        "sortviz",
        &format!("{:?} after {} steps in {}ms", report.outcome, report.steps, report.duration_ms()),
    );
    Ok(())
}
