//! Error types for tracemon

use thiserror::Error;

/// Result type alias for tracemon operations
pub type TracemonResult<T> = Result<T, TracemonError>;

/// Main error type for tracemon
///
/// Monitor failures have their own type, [`crate::monitor::MonitorError`],
/// since they never leave the orchestrator.
#[derive(Error, Debug, Clone)]
pub enum TracemonError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        /// Where the bad value came from (file path, variable name)
        source_hint: Option<String>,
    },
}

impl TracemonError {
    /// Create a configuration error that names where the value came from
    pub fn config_with_context(message: impl Into<String>, source_hint: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source_hint: Some(source_hint.into()),
        }
    }

    /// Where the offending value came from, if known
    pub fn source_hint(&self) -> Option<&str> {
        match self {
            Self::Config { source_hint, .. } => source_hint.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = TracemonError::config_with_context("bad port", "TRACEMON_PORT");
        assert_eq!(err.to_string(), "Configuration error: bad port");
        assert_eq!(err.source_hint(), Some("TRACEMON_PORT"));
    }
}
