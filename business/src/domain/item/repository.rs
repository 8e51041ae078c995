use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Item;

/// Item Store port.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Item, RepositoryError>;
    async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Removes every item and returns how many were removed.
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
}
