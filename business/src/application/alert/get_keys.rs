use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::alert::errors::AlertError;
use crate::domain::alert::model::AlertedKeys;
use crate::domain::alert::repository::AlertStateRepository;
use crate::domain::alert::use_cases::get_keys::GetAlertedKeysUseCase;
use crate::domain::logger::Logger;

pub struct GetAlertedKeysUseCaseImpl {
    pub repository: Arc<dyn AlertStateRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAlertedKeysUseCase for GetAlertedKeysUseCaseImpl {
    async fn execute(&self) -> Result<AlertedKeys, AlertError> {
        self.logger.debug("Loading alert state");
        let keys = self.repository.load().await?;
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::model::AlertKey;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub AlertRepo {}

        #[async_trait]
        impl AlertStateRepository for AlertRepo {
            async fn load(&self) -> Result<AlertedKeys, RepositoryError>;
            async fn save(&self, keys: &AlertedKeys) -> Result<(), RepositoryError>;
            async fn clear(&self) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_persisted_keys() {
        let mut mock_repo = MockAlertRepo::new();
        mock_repo.expect_load().returning(|| {
            Ok(["a", "a_expired"].into_iter().map(AlertKey::new).collect())
        });

        let use_case = GetAlertedKeysUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let keys = use_case.execute().await.unwrap();

        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&AlertKey::new("a_expired")));
    }
}
