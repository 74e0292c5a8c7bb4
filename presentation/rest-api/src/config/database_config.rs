use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::memory::InMemoryProductRepository;
use persistence::product::repository::ProductRepositoryPostgres;
use sqlx::PgPool;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Which adapter backs the product store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl StoreBackend {
    /// Reads `STORE_BACKEND`. Anything other than `memory` selects PostgreSQL.
    pub fn from_env() -> Self {
        Self::parse(env::var("STORE_BACKEND").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("memory") => Self::Memory,
            _ => Self::Postgres,
        }
    }
}

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: seconds to wait for a connection (default: 30)
/// - MIGRATIONS_PATH: directory holding the schema files
///   (default: "infrastructure/persistence/migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails, or the
/// schema cannot be applied
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let mut config = DatabaseConfig::new(db_url);
    if let Some(max) = parse_env::<u32>("DATABASE_MAX_CONNECTIONS") {
        config = config.with_max_connections(max);
    }
    if let Some(secs) = parse_env::<u64>("DATABASE_ACQUIRE_TIMEOUT_SECS") {
        config = config.with_acquire_timeout(Duration::from_secs(secs));
    }

    let pool = create_postgres_pool(&config).await?;

    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    run_migrations(&pool, &migrations_path)
        .await
        .with_context(|| format!("applying schema from {}", migrations_path))?;

    Ok(pool)
}

/// Builds the product store for the selected backend.
pub async fn init_repository(backend: StoreBackend) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory product store, data is lost on shutdown");
            Ok(Arc::new(InMemoryProductRepository::new()))
        }
        StoreBackend::Postgres => {
            let pool = init_database().await?;
            tracing::info!("Connected to PostgreSQL");
            Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparsable setting");
            None
        }
    }
}
