use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::alert::repository::AlertStateRepository;
use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::clear_all::ClearAllItemsUseCase;
use crate::domain::logger::Logger;

/// Removes every item and forgets every alert already delivered.
pub struct ClearAllItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub alert_repository: Arc<dyn AlertStateRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearAllItemsUseCase for ClearAllItemsUseCaseImpl {
    async fn execute(&self) -> Result<u64, ItemError> {
        self.logger.info("Clearing all items and alert state");

        let count = self.repository.delete_all().await?;
        self.alert_repository.clear().await?;

        self.logger.info(&format!("Cleared {} items", count));
        Ok(count)
    }
}
