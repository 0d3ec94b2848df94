use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::{KeyValueStore, StorageError};

/// Key-value store backed by a single JSON object file, e.g.
/// `{"resumeData": "...", "selectedTemplate": "modern"}`.
///
/// Writes rewrite the whole file through a sibling temp file and a rename, so a
/// crash mid-write leaves the previous contents in place. A file that no longer
/// parses is replaced by the next write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!("Using file store at {}", path.display());
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = match self.read_all().await {
            Ok(entries) => entries,
            Err(StorageError::Corrupt(e)) => {
                warn!("Replacing unreadable store file {}: {e}", self.path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(&entries)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("store.json"));
        assert_eq!(store.get("resumeData").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let store = JsonFileStore::new(&path);
        store.set("selectedTemplate", "minimal").await.unwrap();
        store.set("selectedColor", "#000").await.unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.get("selectedTemplate").await.unwrap().as_deref(),
            Some("minimal")
        );
        assert_eq!(reopened.get("selectedColor").await.unwrap().as_deref(), Some("#000"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("k").await, Err(StorageError::Corrupt(_))));
    }

    #[tokio::test]
    async fn test_write_recovers_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{corrupt").unwrap();

        let store = JsonFileStore::new(&path);
        store.set("resumeData", r#"{"summary":"hi"}"#).await.unwrap();

        assert_eq!(
            store.get("resumeData").await.unwrap().as_deref(),
            Some(r#"{"summary":"hi"}"#)
        );
        assert_eq!(JsonFileStore::new(&path).get("selectedColor").await.unwrap(), None);
    }
}
