use super::{cors_config, database_config::StoreBackend, server_config::ServerConfig};
use poem::middleware::Cors;

/// Everything read from the environment at startup.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub store: StoreBackend,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            store: StoreBackend::from_env(),
        }
    }
}
