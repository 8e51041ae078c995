use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::alert::model::{AlertKey, AlertedKeys};
use business::domain::alert::repository::AlertStateRepository;
use business::domain::errors::RepositoryError;

pub struct AlertStateRepositoryPostgres {
    pool: PgPool,
}

impl AlertStateRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlertStateRepository for AlertStateRepositoryPostgres {
    async fn load(&self) -> Result<AlertedKeys, RepositoryError> {
        let keys = sqlx::query_scalar::<_, String>("SELECT key FROM alerted_keys")
            .fetch_all(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(keys.into_iter().map(AlertKey::new).collect())
    }

    async fn save(&self, keys: &AlertedKeys) -> Result<(), RepositoryError> {
        let keys: Vec<String> = keys.iter().map(|k| k.as_str().to_string()).collect();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM alerted_keys WHERE NOT (key = ANY($1))")
            .bind(keys.as_slice())
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query(
            "INSERT INTO alerted_keys (key) SELECT UNNEST($1::text[]) ON CONFLICT (key) DO NOTHING",
        )
        .bind(keys.as_slice())
        .execute(&mut *tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM alerted_keys")
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
