// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `testpace`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "testpace",
    version,
    about = "Run each test suite one at a time and report sorted timings.",
    long_about = None
)]
pub struct CliArgs {
    /// Echo each runner's captured stdout to the console after it finishes.
    #[arg(long)]
    pub show_output: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TESTPACE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
