// src/errors.rs

//! Crate-wide error types.
//!
//! The two failure modes a runner can hit are kept distinct so callers can
//! see exit codes and captured stderr, but both abort the run the same way.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    /// The external process could not be started at all (missing executable,
    /// permission error).
    #[error("failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The external process ran and exited with a non-zero status.
    ///
    /// A process killed by a signal reports code -1.
    #[error("'{command}' exited with code {code}: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, RunnerError>;
