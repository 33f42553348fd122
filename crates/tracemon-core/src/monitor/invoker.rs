//! External monitor process execution

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, instrument};

use super::error::MonitorError;
use crate::config::MonitorConfig;

/// Per-invocation limits
#[derive(Debug, Clone, Default)]
pub struct InvocationOptions {
    /// Kill the monitor once this elapses (wait forever if unset)
    pub timeout: Option<Duration>,
    /// Firing this kills the monitor and fails the invocation
    pub cancel: CancellationToken,
}

impl InvocationOptions {
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

/// Runs the runtime monitor against a trace file and returns its stdout
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MonitorInvoker: Send + Sync {
    async fn invoke(
        &self,
        trace: &Path,
        options: &InvocationOptions,
    ) -> Result<String, MonitorError>;
}

/// Launches the monitor as an OS process: `program args... <trace>`
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl ProcessInvoker {
    pub fn new(program: impl Into<String>, args: impl Into<Vec<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into(),
            working_dir: None,
        }
    }

    pub fn from_config(config: &MonitorConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            working_dir: config.working_dir.clone(),
        }
    }

    /// Run the monitor from a specific directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn command(&self, trace: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(trace)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        cmd
    }
}

#[async_trait]
impl MonitorInvoker for ProcessInvoker {
    #[instrument(skip(self, trace, options), fields(program = %self.program, trace = %trace.display()))]
    async fn invoke(
        &self,
        trace: &Path,
        options: &InvocationOptions,
    ) -> Result<String, MonitorError> {
        let child = self.command(trace).spawn().map_err(|source| MonitorError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        // Dropping `finished` drops the child, and kill_on_drop reaps it
        let finished = child.wait_with_output();
        let waited = async {
            let result = match options.timeout {
                Some(timeout) => tokio::time::timeout(timeout, finished)
                    .await
                    .map_err(|_| MonitorError::Timeout { timeout })?,
                None => finished.await,
            };
            result.map_err(MonitorError::Wait)
        };

        let output = tokio::select! {
            _ = options.cancel.cancelled() => return Err(MonitorError::Cancelled),
            result = waited => result?,
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() && stderr.is_empty() {
            debug!(bytes = stdout.len(), "monitor finished");
            return Ok(stdout);
        }

        error!(
            status = ?output.status,
            %stdout,
            %stderr,
            "execution error in {}",
            trace.display()
        );

        if !output.status.success() {
            Err(MonitorError::ExitStatus {
                code: output.status.code(),
                stderr,
            })
        } else {
            Err(MonitorError::Stderr { stderr })
        }
    }
}
