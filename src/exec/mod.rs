// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the registered test
//! commands, using `tokio::process::Command`, and timing each one.
//!
//! - [`command`] owns the [`Executor`] trait (the seam tests plug a fake
//!   executor into) and the production [`ProcessExecutor`].

pub mod command;

pub use command::{ExecOptions, Executor, ProcessExecutor};
