use async_trait::async_trait;

use crate::domain::item::errors::ItemError;

#[async_trait]
pub trait ClearAllItemsUseCase: Send + Sync {
    /// Returns the number of items removed.
    async fn execute(&self) -> Result<u64, ItemError>;
}
