use std::sync::Arc;

use wayfarer_ai::gemini::GeminiClient;
use wayfarer_ai::geocode::GeocodeClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: wayfarer_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Reverse-geocoding client.
    pub geocode: Arc<GeocodeClient>,
    /// Text-generation client; `None` when no API key is configured.
    pub gemini: Option<Arc<GeminiClient>>,
}

impl AppState {
    /// Build state from a pool and config, constructing the upstream clients
    /// from the config's AI section.
    pub fn new(pool: wayfarer_db::DbPool, config: ServerConfig) -> Self {
        let timeout = config.ai.upstream_timeout();
        let geocode = Arc::new(GeocodeClient::new(
            config.ai.geocode_base_url.clone(),
            timeout,
        ));
        let gemini = config.ai.gemini_api_key.clone().map(|key| {
            Arc::new(GeminiClient::new(
                config.ai.gemini_base_url.clone(),
                key,
                config.ai.gemini_model.clone(),
                timeout,
            ))
        });
        Self {
            pool,
            config: Arc::new(config),
            geocode,
            gemini,
        }
    }
}
