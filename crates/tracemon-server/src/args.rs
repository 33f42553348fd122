//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracemon_core::config::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "tracemon")]
#[command(about = "Runtime-verification verdicts for execution traces")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (JSON or TOML)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE, env = "TRACEMON_CONFIG")]
    pub config: PathBuf,

    /// Log level or filter directive, overrides the configured level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Run the HTTP service (default)
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(long)]
        port: Option<u16>,

        /// Directory holding the session trace files
        #[arg(long)]
        trace_dir: Option<PathBuf>,
    },

    /// Evaluate one trace file and print the verdict as JSON
    Check {
        /// Trace file handed to the monitor
        trace: PathBuf,

        /// Kill the monitor after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
}
