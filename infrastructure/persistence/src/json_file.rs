use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use business::domain::errors::RepositoryError;

/// A JSON document on disk shared by the file-backed stores.
///
/// Reads never fail: a missing file is empty, an unreadable or corrupt one
/// is logged and treated as empty. Writes go through a temporary file and a
/// rename so readers never observe a half-written document. All access is
/// serialized by an async mutex.
pub struct JsonFile {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load<T>(&self) -> T
    where
        T: DeserializeOwned + Default,
    {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    pub async fn store<T>(&self, value: &T) -> Result<(), RepositoryError>
    where
        T: Serialize,
    {
        let _guard = self.lock.lock().await;
        self.write(value).await
    }

    /// Read-modify-write under a single lock acquisition.
    pub async fn update<T, R, F>(&self, apply: F) -> Result<R, RepositoryError>
    where
        T: Serialize + DeserializeOwned + Default,
        F: FnOnce(&mut T) -> R,
    {
        let _guard = self.lock.lock().await;
        let mut value: T = self.read().await;
        let result = apply(&mut value);
        self.write(&value).await?;
        Ok(result)
    }

    async fn read<T>(&self) -> T
    where
        T: DeserializeOwned + Default,
    {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return T::default(),
            Err(e) => {
                tracing::warn!(
                    "Could not read {}, treating it as empty: {}",
                    self.path.display(),
                    e
                );
                return T::default();
            }
        };

        if content.trim().is_empty() {
            return T::default();
        }

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(
                "Corrupt JSON in {}, treating it as empty: {}",
                self.path.display(),
                e
            );
            T::default()
        })
    }

    async fn write<T>(&self, value: &T) -> Result<(), RepositoryError>
    where
        T: Serialize,
    {
        let content = serde_json::to_string_pretty(value).map_err(|e| {
            tracing::error!("Could not serialize {}: {}", self.path.display(), e);
            RepositoryError::Persistence
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                tracing::error!("Could not create {}: {}", parent.display(), e);
                RepositoryError::Persistence
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content).await.map_err(|e| {
            tracing::error!("Could not write {}: {}", tmp.display(), e);
            RepositoryError::Persistence
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            tracing::error!("Could not replace {}: {}", self.path.display(), e);
            RepositoryError::Persistence
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_load_default_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("missing.json"));

        let value: Vec<String> = file.load().await;

        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn should_load_default_when_file_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.json");
        std::fs::write(&path, "{ not json").unwrap();
        let file = JsonFile::new(&path);

        let value: Vec<String> = file.load().await;

        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn should_store_and_load_value() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("nested").join("values.json"));

        file.store(&vec!["a".to_string(), "b".to_string()])
            .await
            .unwrap();
        let value: Vec<String> = file.load().await;

        assert_eq!(value, vec!["a", "b"]);
        assert!(!dir.path().join("nested").join("values.json.tmp").exists());
    }

    #[tokio::test]
    async fn should_apply_update_and_return_its_result() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonFile::new(dir.path().join("counter.json"));

        let len = file
            .update(|values: &mut Vec<u32>| {
                values.push(7);
                values.len()
            })
            .await
            .unwrap();

        assert_eq!(len, 1);
        assert_eq!(file.load::<Vec<u32>>().await, vec![7]);
    }
}
