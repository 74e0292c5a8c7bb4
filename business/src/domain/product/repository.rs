use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::validation::ProductFields;
use super::value_objects::ProductId;

/// Persistence port for products.
///
/// `insert` lets the store assign `id` and `created_at`. `get_by_id`,
/// `update` and `delete` report a missing row as `RepositoryError::NotFound`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, fields: &ProductFields) -> Result<Product, RepositoryError>;
    async fn find_page(&self, skip: u64, limit: u64) -> Result<Vec<Product>, RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
    async fn update(&self, id: ProductId, fields: &ProductFields)
    -> Result<Product, RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
