use std::{path::PathBuf, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// Generic JSON file-backed document collection.
///
/// Persists a `Vec<T>` to a single JSON file, preserving insertion order,
/// and provides read/mutate helpers. Intended for small collections where
/// a database is overkill. Writers serialize on the lock, so checks done
/// inside `update_docs` (like uniqueness) cannot race.
pub struct JsonDocStore<T> {
    inner: Arc<RwLock<Vec<T>>>,
    file_path: PathBuf,
}

impl<T> JsonDocStore<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Open the store at a path, creating the file with an empty collection
    /// if missing. An unreadable or corrupt file is an error so the caller
    /// can decide whether to degrade instead of silently losing data.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let docs: Vec<T> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::Storage(format!("corrupt store file {}: {}", file_path.display(), e))
            })?,
            Err(_) => {
                let empty: Vec<T> = Vec::new();
                let data = serde_json::to_vec(&empty)
                    .map_err(|e| ServiceError::Storage(e.to_string()))?;
                fs::write(&file_path, data)
                    .await
                    .map_err(|e| ServiceError::Storage(e.to_string()))?;
                empty
            }
        };

        Ok(Arc::new(Self {
            inner: Arc::new(RwLock::new(docs)),
            file_path,
        }))
    }

    /// All documents in insertion order.
    pub async fn list(&self) -> Vec<T> {
        let docs = self.inner.read().await;
        docs.clone()
    }

    /// First document matching the predicate.
    pub async fn find<F>(&self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let docs = self.inner.read().await;
        docs.iter().find(|d| pred(d)).cloned()
    }

    pub async fn len(&self) -> usize {
        let docs = self.inner.read().await;
        docs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Apply a mutation to the collection and persist it. The mutation runs
    /// on a staged clone and the file is written while the lock is still
    /// held; only once the write succeeds is the staged state committed, so
    /// a failed mutation or a failed disk write leaves both the collection
    /// and the file as they were.
    pub async fn update_docs<F>(&self, f: F) -> Result<(), ServiceError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<(), ServiceError>,
    {
        let mut docs = self.inner.write().await;
        let mut staged = docs.clone();
        f(&mut staged)?;
        let data =
            serde_json::to_vec(&staged).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        *docs = staged;
        Ok(())
    }
}
