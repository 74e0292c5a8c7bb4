use chrono::{DateTime, Utc};

use super::validation::ProductFields;
use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: f64,
        category: String,
        in_stock: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            category,
            in_stock,
            created_at,
        }
    }

    /// Replaces every mutable field; `id` and `created_at` are kept.
    pub fn apply(&mut self, fields: &ProductFields) {
        self.name = fields.name.clone();
        self.price = fields.price;
        self.category = fields.category.clone();
        self.in_stock = fields.in_stock;
    }
}
