//! Process-local implementation of `ProductRepository`.
//!
//! Keeps products in insertion order behind an async `RwLock`. Used by the
//! HTTP tests and by `STORE_BACKEND=memory` for running without PostgreSQL.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::validation::ProductFields;
use business::domain::product::value_objects::ProductId;

#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn window(len: usize, skip: u64, limit: u64) -> std::ops::Range<usize> {
    let start = usize::try_from(skip).unwrap_or(usize::MAX).min(len);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    start..start.saturating_add(limit).min(len)
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, fields: &ProductFields) -> Result<Product, RepositoryError> {
        let product = Product::from_repository(
            ProductId::new(Uuid::new_v4()),
            fields.name.clone(),
            fields.price,
            fields.category.clone(),
            fields.in_stock,
            Utc::now(),
        );

        self.products.write().await.push(product.clone());
        tracing::debug!(product_id = %product.id, "Inserted product in memory");
        Ok(product)
    }

    async fn find_page(&self, skip: u64, limit: u64) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        let range = window(products.len(), skip, limit);
        Ok(products[range].to_vec())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.products.read().await.len() as u64)
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn update(&self, id: ProductId, fields: &ProductFields) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        product.apply(fields);
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        products.remove(index);
        Ok(())
    }
}
