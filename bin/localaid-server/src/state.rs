//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use localaid_ai::GatewayClient;

use crate::config::Config;

/// State shared across all HTTP handlers.
///
/// The relay holds no mutable state; everything here is read-only after
/// startup, which is the entire concurrency strategy.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Streaming client for the upstream AI gateway.
    pub gateway: GatewayClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let gateway = GatewayClient::new(
            &config.gateway_url,
            config.api_key.clone(),
            &config.model,
        );
        Self {
            config: Arc::new(config),
            gateway,
        }
    }
}
