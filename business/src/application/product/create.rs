use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let fields = params.payload.validate().inspect_err(|e| {
            self.logger
                .debug(&format!("Rejected product payload: {}", e));
        })?;

        self.logger
            .info(&format!("Creating product: {}", fields.name));

        // Lookup and insert are separate store calls; concurrent creates with
        // the same name can both get through.
        if self.repository.find_by_name(&fields.name).await?.is_some() {
            self.logger
                .warn(&format!("Product name already exists: {}", fields.name));
            return Err(ProductError::DuplicateName);
        }

        let product = self.repository.insert(&fields).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
