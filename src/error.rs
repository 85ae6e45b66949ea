//! Error types for story estimation

use thiserror::Error;

/// Errors raised by the analyzer and the estimation pipeline
#[derive(Debug, Error)]
pub enum EstimateError {
    /// The text analyzer could not be loaded. Fatal at startup.
    #[error("failed to initialize text analyzer: {0}")]
    ModelInitialization(String),

    /// The analyzer failed on a specific story text
    #[error("{0}")]
    TextAnalysis(String),
}

impl EstimateError {
    /// Machine-readable code used in HTTP error bodies
    pub fn code(&self) -> &'static str {
        match self {
            EstimateError::ModelInitialization(_) => "MODEL_INIT_FAILED",
            EstimateError::TextAnalysis(_) => "TEXT_ANALYSIS_FAILED",
        }
    }
}

pub type Result<T> = std::result::Result<T, EstimateError>;
