use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::classifier::classify_item;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::ClassifiedItem;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use crate::domain::logger::Logger;

pub struct GetAllItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllItemsUseCase for GetAllItemsUseCaseImpl {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<ClassifiedItem>, ItemError> {
        self.logger
            .info(&format!("Fetching all items as of {}", params.today));
        let items = self.repository.get_all().await?;

        let classified: Vec<ClassifiedItem> = items
            .iter()
            .filter_map(|item| match classify_item(item, params.today) {
                Ok(classified) => Some(classified),
                Err(err) => {
                    self.logger
                        .warn(&format!("Skipping item {}: {}", item.id, err));
                    None
                }
            })
            .collect();

        self.logger
            .info(&format!("Found {} items", classified.len()));
        Ok(classified)
    }
}
