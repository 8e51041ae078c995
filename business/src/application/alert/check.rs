use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::alert::deduplicator::reconcile;
use crate::domain::alert::errors::AlertError;
use crate::domain::alert::model::PendingAlert;
use crate::domain::alert::repository::AlertStateRepository;
use crate::domain::alert::services::Notifier;
use crate::domain::alert::use_cases::check::{CheckAlertsParams, CheckAlertsUseCase};
use crate::domain::item::classifier::classify_item;
use crate::domain::item::model::ClassifiedItem;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;

pub struct CheckAlertsUseCaseImpl {
    pub item_repository: Arc<dyn ItemRepository>,
    pub alert_repository: Arc<dyn AlertStateRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckAlertsUseCase for CheckAlertsUseCaseImpl {
    async fn execute(&self, params: CheckAlertsParams) -> Result<Vec<PendingAlert>, AlertError> {
        self.logger
            .info(&format!("Checking expiry alerts as of {}", params.today));

        let items = self.item_repository.get_all().await?;
        let alerted = self.alert_repository.load().await?;

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

        let reconciliation = reconcile(&classified, &alerted);

        for alert in &reconciliation.to_notify {
            self.logger
                .debug(&format!("Sending {} alert for item {}", alert.kind, alert.item.item.id));
            self.notifier.notify(&alert.title(), &alert.body()).await;
        }

        self.alert_repository
            .save(&reconciliation.updated_keys)
            .await?;

        self.logger.info(&format!(
            "Sent {} alerts, {} alert keys recorded",
            reconciliation.to_notify.len(),
            reconciliation.updated_keys.len()
        ));
        Ok(reconciliation.to_notify)
    }
}
