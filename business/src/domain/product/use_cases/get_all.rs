use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::pagination::{Pagination, ProductPage};

pub struct GetAllProductsParams {
    pub pagination: Pagination,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> Result<ProductPage, ProductError>;
}
