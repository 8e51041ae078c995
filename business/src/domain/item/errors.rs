#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.name_empty")]
    NameEmpty,
    #[error("item.invalid_purchase_date")]
    InvalidPurchaseDate,
    #[error("item.invalid_shelf_life")]
    InvalidShelfLife,
    #[error("item.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ItemError {
    /// True for the errors raised while validating user input; the request
    /// is rejected and nothing is stored.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ItemError::NameEmpty | ItemError::InvalidPurchaseDate | ItemError::InvalidShelfLife
        )
    }
}
