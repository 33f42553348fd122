//! Configuration data model

use super::logging_config::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level tracemon configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External monitor invocation
    pub monitor: MonitorConfig,
    /// Trace file storage
    pub storage: StorageConfig,
    /// HTTP listener
    pub server: ServerConfig,
    /// Logging output
    pub logging: LoggingConfig,
}

/// How the external runtime monitor is launched.
///
/// The trace file path is appended after `args`, so the defaults run
/// `java -jar tessla.jar interpreter specification.tessla <trace>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Executable to spawn
    pub program: String,
    /// Fixed arguments placed before the trace path
    pub args: Vec<String>,
    /// Working directory for the monitor process (inherits ours if unset)
    pub working_dir: Option<PathBuf>,
    /// Kill the monitor after this many seconds (no limit if unset)
    pub timeout_secs: Option<u64>,
    /// Cap on simultaneously running monitor processes (no cap if unset)
    pub max_concurrent: Option<usize>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            program: "java".to_string(),
            args: vec![
                "-jar".to_string(),
                "tessla.jar".to_string(),
                "interpreter".to_string(),
                "specification.tessla".to_string(),
            ],
            working_dir: None,
            timeout_secs: None,
            max_concurrent: None,
        }
    }
}

impl MonitorConfig {
    /// Monitor timeout as a Duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Where session trace files live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Flat directory holding one `<id>.txt` file per session
    pub trace_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            trace_dir: PathBuf::from("./trace-files"),
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_defaults_match_tessla_invocation() {
        let monitor = MonitorConfig::default();
        assert_eq!(monitor.program, "java");
        assert_eq!(
            monitor.args,
            vec!["-jar", "tessla.jar", "interpreter", "specification.tessla"]
        );
        assert!(monitor.timeout().is_none());
        assert!(monitor.max_concurrent.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"server": {"port": 8080}}"#).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.storage.trace_dir, PathBuf::from("./trace-files"));
        assert_eq!(config.monitor, MonitorConfig::default());
    }

    #[test]
    fn test_bind_addr() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            ..Default::default()
        };
        assert_eq!(server.bind_addr(), "0.0.0.0:9000");
    }
}
