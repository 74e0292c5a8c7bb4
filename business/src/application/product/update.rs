use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let fields = params.payload.validate().inspect_err(|e| {
            self.logger
                .debug(&format!("Rejected update for product {}: {}", params.id, e));
        })?;

        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Name uniqueness is only enforced on create; renaming onto an
        // existing name is allowed here.
        let product = self
            .repository
            .update(params.id, &fields)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
