// src/lib.rs

pub mod cli;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod orchestrator;
pub mod registry;
pub mod report;

use tracing::info;

use crate::cli::CliArgs;
use crate::errors::Result;
use crate::exec::{ExecOptions, ProcessExecutor};
use crate::registry::{DEFAULT_RUNNERS, build_registry};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the default runner registry
/// - the real process executor
/// - the sequential orchestrator
/// - the sorted report
pub async fn run(args: CliArgs) -> Result<()> {
    let registry = build_registry(&DEFAULT_RUNNERS);
    info!(runners = registry.len(), "registry built");

    let mut executor = ProcessExecutor::new(ExecOptions {
        show_output: args.show_output,
        ..ExecOptions::default()
    });

    let results = orchestrator::run_all(&registry, &mut executor).await?;

    report::print_report(&results);
    Ok(())
}
