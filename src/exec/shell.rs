//! Shell-backed executor.

use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::process::Command;
use zeroize::Zeroizing;

use super::{Executor, Output};
use crate::command::CommandLine;
use crate::error::{Error, LaunchErrorKind, Result};

/// Exit status POSIX shells use for "command not found".
const EXIT_NOT_FOUND: i32 = 127;
/// Exit status POSIX shells use for "found but not executable".
const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Runs command lines through `<shell> -c 'exec <line>'`.
///
/// `exec` makes the tool replace the shell, so the tool itself is the child
/// process and is killed if the timeout expires or the future is dropped.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: Arc<str>,
}

impl ShellExecutor {
    /// Executor using the given shell interpreter (e.g. `sh`, `/bin/bash`).
    pub fn new(shell: impl Into<Arc<str>>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new("sh")
    }
}

impl Executor for ShellExecutor {
    async fn run(&self, command: &CommandLine, timeout: Duration) -> Result<Output> {
        let program: Box<str> = command.program().into();
        let line = Zeroizing::new(format!("exec {}", command));

        let child = Command::new(&*self.shell)
            .arg("-c")
            .arg(line.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::ProcessLaunch {
                program: program.clone(),
                kind: LaunchErrorKind::Spawn,
                source: Some(e),
            })?;

        let start = Instant::now();
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| Error::Io {
                program: program.clone(),
                source: e,
            })?,
            Err(_) => {
                // Dropping the wait future dropped the child, which kills the tool
                tracing::debug!(program = %program, ?timeout, "tool timed out");
                return Err(Error::ProcessTimeout {
                    program,
                    elapsed: start.elapsed(),
                });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        tracing::trace!(
            program = %program,
            status = ?output.status.code(),
            stdout_len = stdout.len(),
            stderr_len = stderr.len(),
            elapsed = ?start.elapsed(),
            "tool finished"
        );

        match output.status.code() {
            Some(0) => Ok(Output { stdout, stderr }),
            Some(EXIT_NOT_FOUND) => Err(Error::ProcessLaunch {
                program,
                kind: LaunchErrorKind::NotFound,
                source: None,
            }),
            Some(EXIT_NOT_EXECUTABLE) => Err(Error::ProcessLaunch {
                program,
                kind: LaunchErrorKind::PermissionDenied,
                source: None,
            }),
            code => Err(Error::NonZeroExit {
                program,
                code,
                stderr,
            }),
        }
    }
}
