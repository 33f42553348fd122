//! HTTP client for the tracemon API

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracemon_core::MonitorResponse;
use tracemon_store::SessionId;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

const REQUEST_TIMEOUT_SECS: u64 = 300;

#[derive(Deserialize)]
struct CreatedSession {
    id: SessionId,
}

#[derive(Deserialize)]
struct SessionList {
    sessions: Vec<SessionId>,
}

#[derive(Deserialize)]
struct TraceContent {
    content: String,
}

#[derive(Deserialize)]
struct TraceBody {
    body: String,
}

/// Client for one tracemon service
#[derive(Debug, Clone)]
pub struct TracemonClient {
    http: Client,
    base: Url,
}

impl TracemonClient {
    /// Client for the service at `base_url`, e.g. `http://127.0.0.1:3000`
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("tracemon-sdk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_client(http, base_url)
    }

    /// Client using a preconfigured `reqwest::Client`
    pub fn with_client(http: Client, base_url: &str) -> ClientResult<Self> {
        let mut base =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { http, base })
    }

    fn url(&self, path: &str) -> ClientResult<Url> {
        self.base
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path)?;
        debug!(%url, "GET");
        let response = Self::check(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn post_text<T: DeserializeOwned>(&self, path: &str, body: &str) -> ClientResult<T> {
        let url = self.url(path)?;
        debug!(%url, bytes = body.len(), "POST");
        let request = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body.to_string());
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// Start a new session with an empty trace
    pub async fn create_session(&self) -> ClientResult<SessionId> {
        let created: CreatedSession = self.post_text("sessions", "").await?;
        Ok(created.id)
    }

    /// Delete a session and its trace
    pub async fn destroy_session(&self, session: SessionId) -> ClientResult<()> {
        let url = self.url(&format!("sessions/{session}"))?;
        debug!(%url, "DELETE");
        Self::check(self.http.delete(url).send().await?).await?;
        Ok(())
    }

    pub async fn list_sessions(&self) -> ClientResult<Vec<SessionId>> {
        let list: SessionList = self.get_json("sessions").await?;
        Ok(list.sessions)
    }

    pub async fn read_trace(&self, session: SessionId) -> ClientResult<String> {
        let trace: TraceContent = self.get_json(&format!("traces/{session}")).await?;
        Ok(trace.content)
    }

    /// Replace the session's trace
    pub async fn store_trace(&self, session: SessionId, content: &str) -> ClientResult<String> {
        let stored: TraceBody = self
            .post_text(&format!("traces/{session}/overwrite"), content)
            .await?;
        Ok(stored.body)
    }

    /// Append to the session's trace and return the full new trace
    pub async fn append_trace(&self, session: SessionId, text: &str) -> ClientResult<String> {
        let stored: TraceBody = self
            .post_text(&format!("traces/{session}/append"), text)
            .await?;
        Ok(stored.body)
    }

    /// Run the monitor on the session's current trace
    pub async fn receive_monitor_result(&self, session: SessionId) -> ClientResult<MonitorResponse> {
        self.get_json(&format!("monitors/{session}")).await
    }
}
