//! Server state
//!
//! The estimator is immutable after startup and shared by every request.

use std::sync::Arc;
use std::time::Instant;

use crate::estimation::Estimator;

/// Shared application state for the server
pub struct AppState {
    /// Loaded once before the listener binds
    pub estimator: Arc<Estimator>,

    /// When the analyzer finished loading
    pub ready_since: Instant,
}

impl AppState {
    pub fn new(estimator: Estimator) -> Self {
        Self {
            estimator: Arc::new(estimator),
            ready_since: Instant::now(),
        }
    }

    pub fn model_name(&self) -> &str {
        self.estimator.analyzer_name()
    }

    pub fn uptime_secs(&self) -> u64 {
        self.ready_since.elapsed().as_secs()
    }
}
