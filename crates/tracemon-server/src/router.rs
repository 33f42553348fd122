//! Command routing logic for the CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::{http, logging};
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracemon_core::{Config, Monitor};
use tracemon_store::LocalTraceStorage;
use tracing::info;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    logging::init(&config.logging)?;

    match cli.command {
        None => serve(config).await,
        Some(Commands::Serve {
            host,
            port,
            trace_dir,
        }) => {
            apply_serve_overrides(&mut config, host, port, trace_dir);
            serve(config).await
        }
        Some(Commands::Check {
            trace,
            timeout_secs,
        }) => {
            if timeout_secs.is_some() {
                config.monitor.timeout_secs = timeout_secs;
            }
            check(&config, &trace).await
        }
        Some(Commands::Config {
            action: ConfigAction::Show,
        }) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn apply_serve_overrides(
    config: &mut Config,
    host: Option<String>,
    port: Option<u16>,
    trace_dir: Option<PathBuf>,
) {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(trace_dir) = trace_dir {
        config.storage.trace_dir = trace_dir;
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let storage = Arc::new(LocalTraceStorage::with_path(&config.storage.trace_dir));
    let monitor = Arc::new(Monitor::from_config(&config.monitor));
    let state = Arc::new(http::AppState::new(storage, monitor));
    let app = http::build_router(state, config.server.max_body_bytes);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(
        %addr,
        trace_dir = %config.storage.trace_dir.display(),
        monitor = %config.monitor.program,
        timeout_secs = ?config.monitor.timeout_secs,
        max_concurrent = ?config.monitor.max_concurrent,
        "tracemon ready"
    );

    http::serve(listener, app).await.context("server failed")
}

/// One-shot evaluation; Ctrl-C kills the monitor and reports the cancellation
async fn check(config: &Config, trace: &Path) -> anyhow::Result<()> {
    let monitor = Monitor::from_config(&config.monitor);

    let cancel = CancellationToken::new();
    let options = monitor.options().clone().with_cancel(cancel.clone());
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let response = monitor.execute_with(trace, &options).await;
    interrupt.abort();

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
