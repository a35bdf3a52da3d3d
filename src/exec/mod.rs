//! Process execution layer.
//!
//! Provides the `Executor` trait and the shell-backed implementation.

mod shell;

#[cfg(any(test, feature = "testing"))]
mod mock;

pub use shell::*;

#[cfg(any(test, feature = "testing"))]
pub use mock::*;

use crate::command::CommandLine;
use crate::error::Result;
use std::future::Future;
use std::time::Duration;

/// Captured output of a successful tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    /// Output with the given stdout and empty stderr.
    pub fn stdout(text: impl Into<String>) -> Self {
        Self {
            stdout: text.into(),
            stderr: String::new(),
        }
    }
}

/// Runs command lines.
///
/// Implementations report every failure as an [`Error`](crate::Error):
/// a launch failure, a timeout, or a non-zero exit carrying stderr. A
/// returned [`Output`] always comes from a tool that exited successfully.
///
/// # Clone Requirement
///
/// Clients are cheap to clone and own their executor, so executors must be
/// `Clone` as well. Implementations keep shared state behind `Arc`.
pub trait Executor: Send + Sync + Clone {
    /// Run one command line to completion or until `timeout` expires.
    fn run(
        &self,
        command: &CommandLine,
        timeout: Duration,
    ) -> impl Future<Output = Result<Output>> + Send;
}
