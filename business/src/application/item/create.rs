use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::classifier::classify;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::item::value_objects::{ShelfLife, parse_date};
use crate::domain::logger::Logger;

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Creating item: {}", params.name));

        let purchase_date = parse_date(&params.purchase_date)?;
        let shelf_life = ShelfLife::try_from(params.shelf_life)?;
        // Reject items whose expiry date cannot be represented.
        classify(purchase_date, shelf_life, purchase_date)?;
        let item = Item::new(params.name, purchase_date, shelf_life)?;

        self.repository.save(&item).await?;

        self.logger.info(&format!("Item created with id: {}", item.id));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use chrono::NaiveDate;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Item, RepositoryError>;
            async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn delete_all(&self) -> Result<u64, RepositoryError>;
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

    fn params(name: &str, purchase_date: &str, shelf_life: f64) -> CreateItemParams {
        CreateItemParams {
            name: name.to_string(),
            purchase_date: purchase_date.to_string(),
            shelf_life,
        }
    }

    #[tokio::test]
    async fn should_create_item_when_input_valid() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_save()
            .withf(|item| item.name == "Milk" && item.shelf_life.days() == 5)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Milk", "2024-01-01", 5.0)).await;

        assert!(result.is_ok());
        let item = result.unwrap();
        assert_eq!(item.name, "Milk");
        assert_eq!(
            item.purchase_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[tokio::test]
    async fn should_reject_item_when_name_is_empty() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("  ", "2024-01-01", 5.0)).await;

        assert!(matches!(result.unwrap_err(), ItemError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_item_when_purchase_date_malformed() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Milk", "not-a-date", 5.0)).await;

        let err = result.unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(err, ItemError::InvalidPurchaseDate));
    }

    #[tokio::test]
    async fn should_reject_item_when_shelf_life_negative() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Milk", "2024-01-01", -2.0)).await;

        assert!(matches!(result.unwrap_err(), ItemError::InvalidShelfLife));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Milk", "2024-01-01", 5.0)).await;

        let err = result.unwrap_err();
        assert!(!err.is_invalid_input());
        assert!(matches!(err, ItemError::Repository(_)));
    }
}
