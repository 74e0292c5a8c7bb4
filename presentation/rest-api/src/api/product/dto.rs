use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::pagination::ProductPage;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name, unique across the catalog
    pub name: String,
    /// Unit price, always greater than zero
    pub price: f64,
    /// Product category
    pub category: String,
    /// Whether the product is in stock
    pub in_stock: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            price: product.price,
            category: product.category,
            in_stock: product.in_stock,
            created_at: product.created_at,
        }
    }
}

/// A single product wrapped under a `product` key.
#[derive(Debug, Clone, Object)]
pub struct ProductEnvelope {
    pub product: ProductResponse,
}

impl From<Product> for ProductEnvelope {
    fn from(product: Product) -> Self {
        Self {
            product: product.into(),
        }
    }
}

/// One page of the product listing.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_products: u64,
}

impl From<ProductPage> for ProductListResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            products: page.products.into_iter().map(|p| p.into()).collect(),
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_products: page.total_products,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}
