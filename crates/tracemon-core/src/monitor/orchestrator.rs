//! Monitor orchestration: invoke, interpret, fold failures

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use super::invoker::{InvocationOptions, MonitorInvoker, ProcessInvoker};
use super::verdict::{Verdict, interpret};
use crate::config::MonitorConfig;

/// What a client receives for one verdict request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorResponse {
    /// Raw monitor output, or the failure description
    pub output: String,
    /// Whether the property holds
    pub verdict: bool,
    /// Whether `verdict` is final for this trace snapshot
    pub is_definite: bool,
}

/// Result of running the monitor once, before it is shaped for the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Success(String),
    Failure(String),
}

impl Invocation {
    /// Turn the invocation into a client response.
    ///
    /// Clients only have a verdict channel, so a failure becomes a definite
    /// negative verdict with the reason in `output`.
    pub fn fold(self, location: &str) -> MonitorResponse {
        match self {
            Invocation::Success(output) => {
                let Verdict {
                    outcome,
                    is_definite,
                } = interpret(&output);
                MonitorResponse {
                    output,
                    verdict: outcome,
                    is_definite,
                }
            }
            Invocation::Failure(reason) => MonitorResponse {
                output: format!("Error evaluating {}: {}", location, reason),
                verdict: Verdict::DEFINITE_FALSE.outcome,
                is_definite: Verdict::DEFINITE_FALSE.is_definite,
            },
        }
    }
}

/// Runs the monitor for a trace and always produces a [`MonitorResponse`]
pub struct Monitor {
    invoker: Arc<dyn MonitorInvoker>,
    options: InvocationOptions,
    limiter: Option<Semaphore>,
}

impl Monitor {
    pub fn new(invoker: Arc<dyn MonitorInvoker>) -> Self {
        Self {
            invoker,
            options: InvocationOptions::default(),
            limiter: None,
        }
    }

    /// Process-backed monitor with timeout and concurrency cap from config
    pub fn from_config(config: &MonitorConfig) -> Self {
        Self::new(Arc::new(ProcessInvoker::from_config(config)))
            .with_timeout(config.timeout())
            .with_max_concurrent(config.max_concurrent)
    }

    pub fn with_timeout(mut self, timeout: Option<std::time::Duration>) -> Self {
        self.options = self.options.with_timeout(timeout);
        self
    }

    /// Allow at most `limit` monitor processes at once (`None` or 0 for no cap).
    /// Limits above [`Semaphore::MAX_PERMITS`] are clamped to it.
    pub fn with_max_concurrent(mut self, limit: Option<usize>) -> Self {
        self.limiter = limit
            .filter(|n| *n > 0)
            .map(|n| Semaphore::new(n.min(Semaphore::MAX_PERMITS)));
        self
    }

    /// Default options for invocations made through [`Monitor::execute`]
    pub fn options(&self) -> &InvocationOptions {
        &self.options
    }

    /// Evaluate the trace at `trace` with the default options
    pub async fn execute(&self, trace: &Path) -> MonitorResponse {
        self.execute_with(trace, &self.options).await
    }

    /// Evaluate the trace at `trace` with explicit options
    pub async fn execute_with(&self, trace: &Path, options: &InvocationOptions) -> MonitorResponse {
        let location = trace.display().to_string();
        let response = self.run(trace, options).await.fold(&location);
        info!(
            trace = %location,
            verdict = response.verdict,
            is_definite = response.is_definite,
            "monitor verdict"
        );
        response
    }

    async fn run(&self, trace: &Path, options: &InvocationOptions) -> Invocation {
        let _permit = match &self.limiter {
            Some(limiter) => match limiter.acquire().await {
                Ok(permit) => Some(permit),
                Err(e) => return Invocation::Failure(e.to_string()),
            },
            None => None,
        };

        match self.invoker.invoke(trace, options).await {
            Ok(output) => Invocation::Success(output),
            Err(e) => {
                if e.monitor_ran() {
                    debug!(trace = %trace.display(), error = %e, "monitor invocation failed");
                } else {
                    warn!(trace = %trace.display(), error = %e, "monitor invocation failed");
                }
                Invocation::Failure(e.to_string())
            }
        }
    }
}
