use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::pagination::ProductPage;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<ProductPage, ProductError> {
        let pagination = params.pagination;
        self.logger.info(&format!(
            "Fetching products page {} (limit {})",
            pagination.page(),
            pagination.limit()
        ));

        let products = self
            .repository
            .find_page(pagination.skip(), pagination.limit())
            .await?;
        let total = self.repository.count().await?;

        self.logger.debug(&format!(
            "Returning {} of {} products",
            products.len(),
            total
        ));
        Ok(ProductPage::new(products, pagination, total))
    }
}
