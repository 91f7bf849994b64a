// src/orchestrator.rs

//! Sequential driver: runs every registered runner, one at a time, in
//! registry order.
//!
//! Sequencing is deliberate. Several of the runners launch parallel worker
//! processes themselves, and running more than one such runner at once
//! oversubscribes CPU and IO on the host.

use tracing::{error, info};

use crate::errors::Result;
use crate::exec::Executor;
use crate::registry::RunnerSpec;

/// Completed timing record for one runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub name: String,
    pub command: Vec<String>,
    pub execution_time_millis: u64,
}

/// Run every runner in `registry`, strictly in order, collecting one
/// [`RunResult`] per runner in completion order.
///
/// The first failure aborts immediately: no subsequent runner is started and
/// the error propagates to the caller, so no partial report is ever printed.
pub async fn run_all<E: Executor>(
    registry: &[RunnerSpec],
    executor: &mut E,
) -> Result<Vec<RunResult>> {
    let mut results = Vec::with_capacity(registry.len());

    for spec in registry {
        println!("running tests for {}", spec.name);
        println!(". . . . . . . . ");

        let execution_time_millis = match executor.execute(spec).await {
            Ok(millis) => millis,
            Err(err) => {
                error!(runner = %spec.name, error = %err, "runner failed, aborting run");
                return Err(err);
            }
        };

        info!(
            runner = %spec.name,
            elapsed_ms = execution_time_millis,
            "runner completed"
        );

        results.push(RunResult {
            name: spec.name.clone(),
            command: spec.command.clone(),
            execution_time_millis,
        });
    }

    Ok(results)
}
