use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::ClassifiedItem;

pub struct GetAllItemsParams {
    pub today: NaiveDate,
}

#[async_trait]
pub trait GetAllItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<ClassifiedItem>, ItemError>;
}
