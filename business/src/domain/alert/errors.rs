#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
