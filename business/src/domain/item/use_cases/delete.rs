use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;

pub struct DeleteItemParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError>;
}
