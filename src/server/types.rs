//! Server response DTOs
//!
//! Estimate requests and results use `Story` and `ScoreResult` directly.

use serde::{Deserialize, Serialize};

/// Service banner for `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub status: String,
}

/// Readiness check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
