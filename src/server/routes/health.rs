//! Service info and readiness endpoints

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::server::state::AppState;
use crate::server::types::{HealthResponse, ServiceInfo};

/// GET /
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "storyscope".to_string(),
        status: "ok".to_string(),
    })
}

/// GET /health
///
/// State only exists once the analyzer loaded, so reaching this handler
/// means the model is ready.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.model_name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime_secs(),
    })
}
