//! Application state shared across handlers.

use std::sync::Arc;

use zoomnote_enhance::Enhancer;

use crate::cache::SummaryCache;
use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    config: Arc<ServerConfig>,
    /// Remote-first enhancer with local fallback.
    enhancer: Arc<Enhancer>,
    /// Resolved zoom views keyed by text snapshot.
    cache: SummaryCache,
}

impl AppState {
    /// Create application state, building the enhancer from configuration.
    pub fn new(config: ServerConfig) -> Self {
        let enhancer = Enhancer::from_config(&config.enhance);
        Self::with_enhancer(config, enhancer)
    }

    /// Create application state around an existing enhancer.
    pub fn with_enhancer(config: ServerConfig, enhancer: Enhancer) -> Self {
        let cache = SummaryCache::with_config(config.cache);
        Self {
            config: Arc::new(config),
            enhancer: Arc::new(enhancer),
            cache,
        }
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get a reference to the enhancer.
    pub fn enhancer(&self) -> &Enhancer {
        &self.enhancer
    }

    /// Get a reference to the summary cache.
    pub fn cache(&self) -> &SummaryCache {
        &self.cache
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("remote", &self.enhancer.is_remote())
            .finish_non_exhaustive()
    }
}
