// Library exports for storyscope
// This allows the modules to be imported in tests and external code

pub mod analyzer;
pub mod config;
pub mod error;
pub mod estimation;
pub mod server;
pub mod utils;

pub use error::EstimateError;
pub use estimation::{Estimator, ScoreResult, Story};
