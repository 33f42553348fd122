//! Monitor invocation errors

use std::time::Duration;
use thiserror::Error;

/// Why one monitor invocation produced no usable output
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The monitor process could not be started
    #[error("failed to start monitor '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the monitor process failed
    #[error("failed to collect monitor output: {0}")]
    Wait(#[source] std::io::Error),

    /// The monitor exited unsuccessfully
    #[error("monitor exited with {}: {stderr}", describe_code(.code))]
    ExitStatus { code: Option<i32>, stderr: String },

    /// The monitor exited cleanly but wrote to stderr
    #[error("monitor reported errors: {stderr}")]
    Stderr { stderr: String },

    /// The monitor ran past its configured timeout and was killed
    #[error("monitor timed out after {}s", .timeout.as_secs())]
    Timeout { timeout: Duration },

    /// The invocation was cancelled and the monitor killed
    #[error("monitor invocation cancelled")]
    Cancelled,
}

impl MonitorError {
    /// The monitor ran to completion and failed; its output has been logged
    pub fn monitor_ran(&self) -> bool {
        matches!(self, Self::ExitStatus { .. } | Self::Stderr { .. })
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
