use crate::config::ServerConfig;
use catalog::ProductStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Product collection (shared across requests)
    pub catalog: Arc<ProductStore>,
}

impl ServerState {
    /// Create new server state, seeding the demonstration catalog when
    /// configured.
    pub fn new(config: ServerConfig) -> Self {
        let catalog = if config.seed_demo_data {
            Arc::new(ProductStore::with_demo_catalog())
        } else {
            Arc::new(ProductStore::new())
        };

        Self {
            config: Arc::new(config),
            catalog,
        }
    }

    /// Check if API key is valid
    pub fn is_valid_api_key(&self, key: &str) -> bool {
        self.config.api_keys.contains(key)
    }
}
