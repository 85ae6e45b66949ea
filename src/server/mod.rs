//! HTTP server for story estimation
//!
//! Exposes the estimator over a small JSON API. The analyzer is loaded
//! before the listener binds, so a server that accepts requests always has
//! a working model.

pub mod routes;
pub mod state;
pub mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::estimation::Estimator;
use state::AppState;

/// Default port for the server
pub const DEFAULT_PORT: u16 = 8001;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub cors_enabled: bool,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: default_host(),
            cors_enabled: false,
        }
    }
}

/// Build the router over shared state
pub fn router(state: Arc<AppState>, cors_enabled: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(routes::health::service_info))
        .route("/health", get(routes::health::health_check))
        .route("/estimate", post(routes::estimate::estimate_story))
        .route("/openapi.json", get(routes::openapi::openapi_spec))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Load the analyzer, then bind and serve until the process exits
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    let server = config.server.clone();

    let estimator =
        Estimator::from_config(&config).context("Text analyzer failed to load; refusing to start")?;
    let state = Arc::new(AppState::new(estimator));

    let app = router(state, server.cors_enabled);

    let addr: SocketAddr = format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("storyscope listening on http://{}", addr);
    tracing::info!("API documentation: http://{}/openapi.json", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
