use std::sync::Arc;

use logger::TracingLogger;
use notifier::log::LogNotifier;
use notifier::webhook::WebhookNotifier;
use persistence::alert::file_repository::AlertStateRepositoryJsonFile;
use persistence::alert::repository::AlertStateRepositoryPostgres;
use persistence::item::file_repository::ItemRepositoryJsonFile;
use persistence::item::repository::ItemRepositoryPostgres;

use business::application::alert::check::CheckAlertsUseCaseImpl;
use business::application::alert::get_keys::GetAlertedKeysUseCaseImpl;
use business::application::item::clear_all::ClearAllItemsUseCaseImpl;
use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_all::GetAllItemsUseCaseImpl;
use business::domain::alert::repository::AlertStateRepository;
use business::domain::alert::services::Notifier;
use business::domain::alert::use_cases::check::CheckAlertsUseCase;
use business::domain::item::repository::ItemRepository;

use crate::config::database_config;
use crate::config::notifier_config::NotifierConfig;
use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub item_api: crate::api::item::routes::ItemApi,
    pub alert_api: crate::api::alert::routes::AlertApi,
    /// Shared with the periodic alert scheduler
    pub check_alerts_use_case: Arc<dyn CheckAlertsUseCase>,
}

impl DependencyContainer {
    pub async fn new(storage: &StorageConfig, notifier: &NotifierConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let (item_repository, alert_repository) = init_repositories(storage).await?;
        let notifier: Arc<dyn Notifier> = match &notifier.webhook_url {
            Some(url) => {
                tracing::info!("Delivering notifications to webhook {}", url);
                Arc::new(WebhookNotifier::new(url.clone()))
            }
            None => {
                tracing::info!("No webhook configured, notifications are only logged");
                Arc::new(LogNotifier)
            }
        };

        // Item use cases
        let create_use_case = Arc::new(CreateItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllItemsUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let clear_all_use_case = Arc::new(ClearAllItemsUseCaseImpl {
            repository: item_repository.clone(),
            alert_repository: alert_repository.clone(),
            logger: logger.clone(),
        });

        // Alert use cases
        let check_alerts_use_case: Arc<dyn CheckAlertsUseCase> = Arc::new(CheckAlertsUseCaseImpl {
            item_repository,
            alert_repository: alert_repository.clone(),
            notifier,
            logger: logger.clone(),
        });
        let get_keys_use_case = Arc::new(GetAlertedKeysUseCaseImpl {
            repository: alert_repository,
            logger,
        });

        let item_api = crate::api::item::routes::ItemApi::new(
            create_use_case,
            get_all_use_case,
            delete_use_case,
            clear_all_use_case,
        );
        let alert_api = crate::api::alert::routes::AlertApi::new(
            check_alerts_use_case.clone(),
            get_keys_use_case,
        );

        Ok(Self {
            health_api,
            item_api,
            alert_api,
            check_alerts_use_case,
        })
    }
}

async fn init_repositories(
    storage: &StorageConfig,
) -> anyhow::Result<(Arc<dyn ItemRepository>, Arc<dyn AlertStateRepository>)> {
    match storage {
        StorageConfig::Postgres { database_url } => {
            tracing::info!("Using PostgreSQL storage");
            let pool = database_config::init_database(database_url).await?;
            let items: Arc<dyn ItemRepository> = Arc::new(ItemRepositoryPostgres::new(pool.clone()));
            let alerts: Arc<dyn AlertStateRepository> =
                Arc::new(AlertStateRepositoryPostgres::new(pool));
            Ok((items, alerts))
        }
        StorageConfig::JsonFile { data_dir } => {
            tracing::info!("Using JSON file storage in {}", data_dir.display());
            let items: Arc<dyn ItemRepository> =
                Arc::new(ItemRepositoryJsonFile::new(data_dir.join("items.json")));
            let alerts: Arc<dyn AlertStateRepository> =
                Arc::new(AlertStateRepositoryJsonFile::new(data_dir.join("alerts.json")));
            Ok((items, alerts))
        }
    }
}
