use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::validation::ProductFields;
use business::domain::product::value_objects::ProductId;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_fault(error: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %error, "product store query failed");
    RepositoryError::database(error.to_string())
}

fn to_sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    #[instrument(skip(self, fields), fields(product_name = %fields.name))]
    async fn insert(&self, fields: &ProductFields) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, price, category, in_stock)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, category, in_stock, created_at"#,
        )
        .bind(&fields.name)
        .bind(fields.price)
        .bind(&fields.category)
        .bind(fields.in_stock)
        .fetch_one(&self.pool)
        .await
        .map_err(store_fault)?;

        Ok(entity.into_domain())
    }

    #[instrument(skip(self))]
    async fn find_page(&self, skip: u64, limit: u64) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, category, in_stock, created_at FROM products ORDER BY created_at ASC, id ASC OFFSET $1 LIMIT $2",
        )
        .bind(to_sql_bound(skip))
        .bind(to_sql_bound(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(store_fault)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(store_fault)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, category, in_stock, created_at FROM products WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_fault)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, category, in_stock, created_at FROM products WHERE name = $1 LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_fault)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    #[instrument(skip(self, fields), fields(product_id = %id))]
    async fn update(&self, id: ProductId, fields: &ProductFields) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products
            SET name = $2, price = $3, category = $4, in_stock = $5
            WHERE id = $1
            RETURNING id, name, price, category, in_stock, created_at"#,
        )
        .bind(id.as_uuid())
        .bind(&fields.name)
        .bind(fields.price)
        .bind(&fields.category)
        .bind(fields.in_stock)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_fault)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(store_fault)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
