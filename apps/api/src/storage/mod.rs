//! Persistence adapter: durable key-value storage for the document blob and
//! render preferences.
//!
//! The core only needs `get`/`set` on string values and never assumes that
//! several keys are written atomically. Two backends exist:
//! - `MemoryStore`: process-local, the default and the test double.
//! - `JsonFileStore`: one JSON object file on local disk.
//!
//! The session holds an `Arc<dyn KeyValueStore>`, chosen at startup via config,
//! and writes to it through a `WriteQueue`.

pub mod file;
pub mod preferences;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, warn};

pub use file::JsonFileStore;

pub const DOCUMENT_KEY: &str = "resumeData";
pub const TEMPLATE_KEY: &str = "selectedTemplate";
pub const COLOR_KEY: &str = "selectedColor";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file is not a JSON object: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Fire-and-forget writer. Every value goes through one background task, so
/// blobs reach the store in the order they were queued; values still waiting
/// for the same key collapse to the newest one.
#[derive(Debug, Clone)]
pub struct WriteQueue {
    tx: mpsc::UnboundedSender<(&'static str, String)>,
}

impl WriteQueue {
    /// Starts the writer task. Must be called inside a tokio runtime.
    pub fn spawn(store: Arc<dyn KeyValueStore>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<(&'static str, String)>();

        tokio::spawn(async move {
            while let Some(first) = rx.recv().await {
                let mut pending = vec![first];
                while let Ok(next) = rx.try_recv() {
                    pending.push(next);
                }

                for (key, value) in latest_per_key(pending) {
                    match store.set(key, &value).await {
                        Ok(()) => debug!("Persisted '{key}' ({} bytes)", value.len()),
                        Err(e) => warn!("Failed to persist '{key}': {e}"),
                    }
                }
            }
            debug!("Write queue closed");
        });

        Self { tx }
    }

    /// Queues a write. The caller does not wait; failures are logged and
    /// swallowed by the writer task.
    pub fn push(&self, key: &'static str, value: String) {
        if self.tx.send((key, value)).is_err() {
            warn!("Write queue is closed, dropping write to '{key}'");
        }
    }
}

/// Keeps the last value per key, ordered by when that value was queued.
fn latest_per_key(pending: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
    let mut latest: Vec<(&'static str, String)> = Vec::with_capacity(pending.len());
    for (key, value) in pending {
        latest.retain(|(k, _)| *k != key);
        latest.push((key, value));
    }
    latest
}
