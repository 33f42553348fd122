//! End-to-end workflow test
//!
//! Runs the HTTP service on an ephemeral port with a shell script standing in
//! for the runtime monitor, and drives it through the SDK client.

#![cfg(unix)]

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;
use tracemon::config::MonitorConfig;
use tracemon::sdk::ClientError;
use tracemon::server::{AppState, build_router, serve};
use tracemon::{LocalTraceStorage, Monitor, TracemonClient};

/// Monitor script: echoes the trace, or fails when the trace says so
const FAKE_MONITOR: &str = r#"
if grep -q CRASH "$1"; then
    echo "Exception in thread main" >&2
    exit 1
fi
cat "$1"
"#;

async fn start_service(dir: &Path) -> TracemonClient {
    let script = dir.join("monitor.sh");
    std::fs::write(&script, FAKE_MONITOR).unwrap();

    let monitor_config = MonitorConfig {
        program: "sh".to_string(),
        args: vec![script.display().to_string()],
        ..Default::default()
    };
    let storage = Arc::new(LocalTraceStorage::with_path(dir.join("trace-files")));
    let monitor = Arc::new(Monitor::from_config(&monitor_config));
    let app = build_router(Arc::new(AppState::new(storage, monitor)), 1024 * 1024);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        serve(listener, app).await.unwrap();
    });

    TracemonClient::new(&format!("http://{addr}")).unwrap()
}

#[tokio::test]
async fn test_session_lifecycle_through_sdk() {
    let temp = TempDir::new().unwrap();
    let client = start_service(temp.path()).await;

    assert!(client.list_sessions().await.unwrap().is_empty());

    let first = client.create_session().await.unwrap();
    let second = client.create_session().await.unwrap();
    assert_eq!(client.list_sessions().await.unwrap(), vec![first, second]);

    client.destroy_session(first).await.unwrap();
    assert_eq!(client.list_sessions().await.unwrap(), vec![second]);

    let err = client.destroy_session(first).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_trace_editing_through_sdk() {
    let temp = TempDir::new().unwrap();
    let client = start_service(temp.path()).await;
    let session = client.create_session().await.unwrap();

    assert_eq!(client.store_trace(session, "A").await.unwrap(), "A");
    assert_eq!(client.append_trace(session, "B").await.unwrap(), "A \r\n B");
    assert_eq!(client.read_trace(session).await.unwrap(), "A \r\n B");
}

#[tokio::test]
async fn test_verdicts_follow_trace_growth() {
    let temp = TempDir::new().unwrap();
    let client = start_service(temp.path()).await;
    let session = client.create_session().await.unwrap();

    // Nothing emitted yet: optimistic and provisional
    let result = client.receive_monitor_result(session).await.unwrap();
    assert!(result.verdict);
    assert!(!result.is_definite);

    client
        .store_trace(session, "1: finalVerdict = -1")
        .await
        .unwrap();
    let result = client.receive_monitor_result(session).await.unwrap();
    assert!(!result.verdict);
    assert!(!result.is_definite);

    client
        .append_trace(session, "2: finalVerdict = 0")
        .await
        .unwrap();
    let result = client.receive_monitor_result(session).await.unwrap();
    assert!(result.verdict);
    assert!(!result.is_definite);

    client
        .append_trace(session, "3: finalVerdict = -2")
        .await
        .unwrap();
    let result = client.receive_monitor_result(session).await.unwrap();
    assert!(!result.verdict);
    assert!(result.is_definite);
}

#[tokio::test]
async fn test_monitor_failure_reported_as_definite_violation() {
    let temp = TempDir::new().unwrap();
    let client = start_service(temp.path()).await;
    let session = client.create_session().await.unwrap();
    client.store_trace(session, "CRASH").await.unwrap();

    let result = client.receive_monitor_result(session).await.unwrap();
    assert!(!result.verdict);
    assert!(result.is_definite);
    assert!(result.output.starts_with("Error evaluating "));
    assert!(result.output.contains("Exception in thread main"));
}
