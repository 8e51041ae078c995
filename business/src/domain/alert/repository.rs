use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::AlertedKeys;

/// Alert-State Store port: the persisted set of delivered alert keys.
#[async_trait]
pub trait AlertStateRepository: Send + Sync {
    async fn load(&self) -> Result<AlertedKeys, RepositoryError>;
    /// Replaces the stored set with `keys`.
    async fn save(&self, keys: &AlertedKeys) -> Result<(), RepositoryError>;
    async fn clear(&self) -> Result<(), RepositoryError>;
}
