/// Repository errors for domain layer.
/// `Database` keeps the driver's own text so callers can surface it verbatim.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("{0}")]
    Database(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn database(detail: impl Into<String>) -> Self {
        RepositoryError::Database(detail.into())
    }

    /// Underlying store message, as reported by the driver.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}
