//! Application state management

use std::sync::Arc;

use crate::{
    config::Config,
    database,
    error::Result,
    repository::{CatalogStore, PgCatalogStore},
};

/// Application state shared across handlers
///
/// Generic over the store so that handlers can be exercised against an
/// in-memory implementation. All requests see the same configuration and
/// store; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState<S = PgCatalogStore> {
    config: Arc<Config>,
    store: S,
}

impl AppState<PgCatalogStore> {
    /// Build production state: connect the pool and wrap it as the store
    pub async fn from_config(config: Config) -> Result<Self> {
        let pool = database::create_pool(&config.database).await?;
        Ok(Self {
            config: Arc::new(config),
            store: PgCatalogStore::new(pool),
        })
    }
}

impl<S> AppState<S>
where
    S: CatalogStore + Clone,
{
    /// Build state around an existing store
    pub fn with_store(config: Config, store: S) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the catalog store
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryCatalogStore;

    #[test]
    fn test_state_exposes_config_and_store() {
        let state = AppState::with_store(Config::default(), MemoryCatalogStore::new(vec![]));
        assert_eq!(state.config().service.name, "catalog-service");
        let _cloned = state.clone();
    }
}
