//! Mock executor for testing.
//!
//! Provides a programmable executor that replays canned tool output without
//! needing Net-SNMP installed.

use super::{Executor, Output};
use crate::command::CommandLine;
use crate::error::{Error, LaunchErrorKind, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A mock response to return for a command.
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Exit successfully with this output.
    Output(Output),
    /// Exit with a non-zero status and this stderr.
    Exit { code: i32, stderr: String },
    /// Simulate a missing tool.
    NotFound,
    /// Simulate a timeout.
    Timeout,
}

/// A recorded command run through the mock executor.
#[derive(Clone, Debug)]
pub struct RecordedCommand {
    /// The exact command line.
    pub line: String,
    /// Timeout the caller asked for.
    pub timeout: Duration,
}

struct MockExecutorInner {
    responses: VecDeque<MockResponse>,
    commands: Vec<RecordedCommand>,
    default_response: Option<MockResponse>,
}

/// Mock executor for testing client functionality.
///
/// # Example
///
/// ```rust
/// use snmp_shell::exec::MockExecutor;
///
/// let mut mock = MockExecutor::new();
/// mock.queue_stdout(".1.3.6.1.2.1.1.5.0 = STRING: \"router1\"\n");
/// mock.queue_exit(1, "Timeout: No Response from udp:10.0.0.1:161.");
/// ```
#[derive(Clone)]
pub struct MockExecutor {
    inner: Arc<Mutex<MockExecutorInner>>,
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockExecutor {
    /// Create a new mock executor.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockExecutorInner {
                responses: VecDeque::new(),
                commands: Vec::new(),
                default_response: None,
            })),
        }
    }

    /// Queue a successful run with this stdout.
    pub fn queue_stdout(&mut self, stdout: impl Into<String>) {
        self.queue(MockResponse::Output(Output::stdout(stdout)));
    }

    /// Queue a non-zero exit.
    pub fn queue_exit(&mut self, code: i32, stderr: impl Into<String>) {
        self.queue(MockResponse::Exit {
            code,
            stderr: stderr.into(),
        });
    }

    /// Queue a timeout.
    pub fn queue_timeout(&mut self) {
        self.queue(MockResponse::Timeout);
    }

    /// Queue any response.
    pub fn queue(&mut self, response: MockResponse) {
        let mut inner = self.inner.lock().unwrap();
        inner.responses.push_back(response);
    }

    /// Set a default response when the queue is empty.
    pub fn set_default_response(&mut self, response: MockResponse) {
        let mut inner = self.inner.lock().unwrap();
        inner.default_response = Some(response);
    }

    /// Get all recorded commands.
    pub fn commands(&self) -> Vec<RecordedCommand> {
        let inner = self.inner.lock().unwrap();
        inner.commands.clone()
    }

    /// Recorded command lines only.
    pub fn lines(&self) -> Vec<String> {
        self.commands().into_iter().map(|c| c.line).collect()
    }

    /// Clear recorded commands.
    pub fn clear_commands(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.commands.clear();
    }
}

impl Executor for MockExecutor {
    async fn run(&self, command: &CommandLine, timeout: Duration) -> Result<Output> {
        let program: Box<str> = command.program().into();
        let response = {
            let mut inner = self.inner.lock().unwrap();
            inner.commands.push(RecordedCommand {
                line: command.to_string(),
                timeout,
            });
            inner
                .responses
                .pop_front()
                .or_else(|| inner.default_response.clone())
        };

        match response {
            Some(MockResponse::Output(output)) => Ok(output),
            Some(MockResponse::Exit { code, stderr }) => Err(Error::NonZeroExit {
                program,
                code: Some(code),
                stderr,
            }),
            Some(MockResponse::NotFound) => Err(Error::ProcessLaunch {
                program,
                kind: LaunchErrorKind::NotFound,
                source: None,
            }),
            Some(MockResponse::Timeout) => Err(Error::ProcessTimeout {
                program,
                elapsed: timeout,
            }),
            None => Err(Error::NonZeroExit {
                program,
                code: Some(1),
                stderr: "mock executor: no response queued".into(),
            }),
        }
    }
}
