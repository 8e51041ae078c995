use async_trait::async_trait;

use crate::domain::alert::errors::AlertError;
use crate::domain::alert::model::AlertedKeys;

#[async_trait]
pub trait GetAlertedKeysUseCase: Send + Sync {
    async fn execute(&self) -> Result<AlertedKeys, AlertError>;
}
