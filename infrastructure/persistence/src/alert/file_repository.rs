use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::alert::model::AlertedKeys;
use business::domain::alert::repository::AlertStateRepository;
use business::domain::errors::RepositoryError;

use crate::json_file::JsonFile;

/// Alert keys kept as a JSON array of strings on disk.
pub struct AlertStateRepositoryJsonFile {
    file: JsonFile,
}

impl AlertStateRepositoryJsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }
}

#[async_trait]
impl AlertStateRepository for AlertStateRepositoryJsonFile {
    async fn load(&self) -> Result<AlertedKeys, RepositoryError> {
        Ok(self.file.load().await)
    }

    async fn save(&self, keys: &AlertedKeys) -> Result<(), RepositoryError> {
        self.file.store(keys).await
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        self.file.store(&AlertedKeys::new()).await
    }
}
