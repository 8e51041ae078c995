use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;

/// Removes a single item.
///
/// Alert keys recorded for the item stay in the alert-state store; only
/// clearing all items forgets them.
pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError> {
        self.logger.info(&format!("Deleting item: {}", params.id));

        let item = match self.repository.get_by_id(params.id).await {
            Ok(item) => item,
            Err(RepositoryError::NotFound) => {
                self.logger
                    .warn(&format!("Item not found for deletion: {}", params.id));
                return Err(ItemError::NotFound);
            }
            Err(e) => return Err(e.into()),
        };

        self.repository.delete(item.id).await?;

        self.logger.info(&format!(
            "Item '{}' deleted, its alert keys are kept: {}",
            item.name, item.id
        ));
        Ok(())
    }
}
