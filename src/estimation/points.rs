//! Complexity to Fibonacci story points

use crate::config::{PointBand, PointsConfig};

/// Ordered threshold bands; each upper bound is inclusive
#[derive(Debug, Clone)]
pub struct PointScale {
    bands: Vec<PointBand>,
}

impl PointScale {
    pub fn new(bands: Vec<PointBand>) -> Self {
        Self { bands }
    }

    pub fn from_config(config: &PointsConfig) -> Self {
        Self::new(config.bands.clone())
    }

    /// Points of the first band whose threshold `complexity` does not exceed.
    ///
    /// Falls back to the largest point value if no band matches, which only
    /// happens when the table tops out below the maximum score.
    pub fn map_to_points(&self, complexity: f64) -> u32 {
        self.bands
            .iter()
            .find(|band| complexity <= band.max_complexity)
            .map(|band| band.points)
            .unwrap_or_else(|| self.max_points())
    }

    pub fn max_points(&self) -> u32 {
        self.bands.iter().map(|band| band.points).max().unwrap_or(1)
    }

    pub fn bands(&self) -> &[PointBand] {
        &self.bands
    }
}

impl Default for PointScale {
    fn default() -> Self {
        Self::from_config(&PointsConfig::default())
    }
}
