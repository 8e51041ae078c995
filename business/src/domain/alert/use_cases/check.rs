use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::alert::errors::AlertError;
use crate::domain::alert::model::PendingAlert;

pub struct CheckAlertsParams {
    pub today: NaiveDate,
}

#[async_trait]
pub trait CheckAlertsUseCase: Send + Sync {
    /// Runs one reconcile-and-notify pass and returns the alerts sent.
    async fn execute(&self, params: CheckAlertsParams) -> Result<Vec<PendingAlert>, AlertError>;
}
