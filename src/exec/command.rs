// src/exec/command.rs

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;
use std::time::Instant;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{Result, RunnerError};
use crate::registry::RunnerSpec;

/// Options for the production executor.
#[derive(Debug, Clone)]
pub struct ExecOptions {
    /// The package-manager executable to invoke. `npm` in the normal wiring;
    /// tests point this at a stub script.
    pub program: String,

    /// Echo each runner's captured stdout to the console after a successful
    /// run. Off by default.
    pub show_output: bool,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            program: "npm".to_string(),
            show_output: false,
        }
    }
}

/// Trait abstracting how a single runner is executed.
///
/// Production code uses [`ProcessExecutor`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait Executor: Send {
    /// Execute the given runner to completion and return its elapsed
    /// wall-clock time in milliseconds.
    fn execute<'a>(
        &'a mut self,
        spec: &'a RunnerSpec,
    ) -> Pin<Box<dyn Future<Output = Result<u64>> + Send + 'a>>;
}

/// Real executor: spawns the package-manager process and waits for it.
///
/// Exactly one child process is in flight at a time; the spawned runner may
/// fan out its own workers internally, which is opaque here.
pub struct ProcessExecutor {
    options: ExecOptions,
}

impl ProcessExecutor {
    pub fn new(options: ExecOptions) -> Self {
        Self { options }
    }
}

impl Executor for ProcessExecutor {
    fn execute<'a>(
        &'a mut self,
        spec: &'a RunnerSpec,
    ) -> Pin<Box<dyn Future<Output = Result<u64>> + Send + 'a>> {
        Box::pin(run_process(&self.options, spec))
    }
}

async fn run_process(options: &ExecOptions, spec: &RunnerSpec) -> Result<u64> {
    let invocation = format_invocation(&options.program, &spec.command);
    info!(runner = %spec.name, cmd = %invocation, "starting runner process");

    let mut cmd = Command::new(&options.program);
    cmd.args(&spec.command)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    // Timed from immediately before launch to immediately after exit, so
    // the measurement covers only this runner's own invocation.
    let start = Instant::now();
    let output = cmd.output().await.map_err(|source| RunnerError::Launch {
        command: invocation.clone(),
        source,
    })?;
    let elapsed = start.elapsed().as_millis() as u64;

    let code = output.status.code().unwrap_or(-1);
    info!(
        runner = %spec.name,
        exit_code = code,
        elapsed_ms = elapsed,
        success = output.status.success(),
        "runner process exited"
    );

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr)
            .trim_end()
            .to_string();
        return Err(RunnerError::NonZeroExit {
            command: invocation,
            code,
            stderr,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if options.show_output {
        println!("{}", stdout.trim_end());
    } else {
        debug!(runner = %spec.name, "stdout: {}", stdout.trim_end());
    }

    Ok(elapsed)
}

fn format_invocation(program: &str, command: &[String]) -> String {
    format!("{program} {}", command.join(" "))
}
