use super::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid product ID")]
    InvalidId,
    #[error("Product name already exists")]
    DuplicateName,
    #[error("Product not found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
