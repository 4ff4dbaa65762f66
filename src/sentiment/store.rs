//! The optional durable store for per-query sentiment records.
//!
//! Overwrite semantics, no versioning: at most one record per key, and
//! last-write-wins is acceptable between concurrent queries.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::DashError;
use crate::sentiment::model::SentimentRecord;

/// A keyed store for [`SentimentRecord`]s.
#[async_trait]
pub trait SentimentStore: Send + Sync {
    /// Writes `record` under `key`, replacing any prior record for that key.
    async fn put(&self, key: &str, record: &SentimentRecord) -> Result<(), DashError>;

    /// Reads the record stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<SentimentRecord>, DashError>;
}

/// An in-memory store, mainly for tests and short-lived processes.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    map: Arc<RwLock<HashMap<String, SentimentRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SentimentStore for MemoryStore {
    async fn put(&self, key: &str, record: &SentimentRecord) -> Result<(), DashError> {
        let mut guard = self.map.write().await;
        guard.insert(key.to_string(), record.clone());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<SentimentRecord>, DashError> {
        let guard = self.map.read().await;
        Ok(guard.get(key).cloned())
    }
}

/// A store that keeps one JSON file per key under a directory.
///
/// Writes go to a temp file first and are renamed into place, so a crashed
/// write never leaves a torn record behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl SentimentStore for JsonFileStore {
    async fn put(&self, key: &str, record: &SentimentRecord) -> Result<(), DashError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let body = serde_json::to_vec_pretty(record)?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        tokio::fs::write(&tmp, &body).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<SentimentRecord>, DashError> {
        let path = self.path_for(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
