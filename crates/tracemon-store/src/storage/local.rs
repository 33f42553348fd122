//! Local filesystem trace storage
//!
//! Stores each session's trace as `<id>.txt` in one flat directory.

use super::{SessionId, StorageError, StorageResult, TraceStorage};
use crate::trace::append_trace;
use async_trait::async_trait;
use dashmap::DashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, warn};

const TRACE_EXTENSION: &str = "txt";

/// Local filesystem trace storage
///
/// Writes to one session are serialized; different sessions never wait on
/// each other.
pub struct LocalTraceStorage {
    /// Directory holding the trace files
    base_path: PathBuf,
    /// Per-session write locks
    locks: DashMap<SessionId, Arc<Mutex<()>>>,
    /// Held while picking and claiming a new id
    create_lock: Mutex<()>,
}

impl LocalTraceStorage {
    /// Create storage rooted at `base_path`
    pub fn with_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            locks: DashMap::new(),
            create_lock: Mutex::new(()),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Ensure storage directory exists
    async fn ensure_dir(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.base_path).await?;
        Ok(())
    }

    async fn lock_session(&self, id: SessionId) -> OwnedMutexGuard<()> {
        let lock = self.locks.entry(id).or_default().clone();
        lock.lock_owned().await
    }

    /// Read a trace file, treating a missing file as empty
    async fn read_path(path: &Path) -> StorageResult<String> {
        match fs::read_to_string(path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_trace(&self, id: SessionId, content: &str) -> StorageResult<()> {
        self.ensure_dir().await?;
        let path = self.trace_path(id);
        fs::write(&path, content).await?;
        debug!("Wrote {} bytes to session {} at {:?}", content.len(), id, path);
        Ok(())
    }
}

/// Session id encoded in a trace file name, if it is `<digits>.txt`
fn parse_session_file(name: &str) -> Option<SessionId> {
    let stem = name.strip_suffix(TRACE_EXTENSION)?.strip_suffix('.')?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

#[async_trait]
impl TraceStorage for LocalTraceStorage {
    async fn create(&self) -> StorageResult<SessionId> {
        let _guard = self.create_lock.lock().await;
        self.ensure_dir().await?;

        let mut id = match self.list_ids().await?.last() {
            Some(&highest) => highest
                .checked_add(1)
                .ok_or(StorageError::IdsExhausted(highest))?,
            None => 1,
        };

        loop {
            let path = self.trace_path(id);
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(_) => {
                    debug!("Created session {} at {:?}", id, path);
                    return Ok(id);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    id = id.checked_add(1).ok_or(StorageError::IdsExhausted(id))?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn read(&self, id: SessionId) -> StorageResult<String> {
        Self::read_path(&self.trace_path(id)).await
    }

    async fn append(&self, id: SessionId, text: &str) -> StorageResult<String> {
        let _guard = self.lock_session(id).await;
        let existing = Self::read_path(&self.trace_path(id)).await?;
        let updated = append_trace(&existing, text);
        self.write_trace(id, &updated).await?;
        Ok(updated)
    }

    async fn overwrite(&self, id: SessionId, content: &str) -> StorageResult<()> {
        let _guard = self.lock_session(id).await;
        self.write_trace(id, content).await
    }

    async fn delete(&self, id: SessionId) -> StorageResult<()> {
        let guard = self.lock_session(id).await;
        let path = self.trace_path(id);

        match fs::remove_file(&path).await {
            Ok(()) => debug!("Deleted session {} at {:?}", id, path),
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StorageError::NotFound(id)),
            Err(e) => return Err(e.into()),
        }

        // Evict the lock only when nobody is queued on it: the map entry and
        // `guard` are the only owners then
        self.locks.remove_if(&id, |_, lock| Arc::strong_count(lock) == 2);
        drop(guard);
        Ok(())
    }

    async fn list_ids(&self) -> StorageResult<Vec<SessionId>> {
        let mut entries = match fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            match name.to_str().and_then(parse_session_file) {
                Some(id) => ids.push(id),
                None => warn!("Skipping non-session file {:?} in trace directory", name),
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }

    fn trace_path(&self, id: SessionId) -> PathBuf {
        self.base_path.join(format!("{}.{}", id, TRACE_EXTENSION))
    }
}
