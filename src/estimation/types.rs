//! Story input and estimate output records

use serde::{Deserialize, Serialize};

use super::features::FeatureSet;
use crate::utils::round_to;

/// A user story to estimate. Missing fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    /// Order is irrelevant to scoring; duplicates are counted
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Story {
    pub fn new(summary: impl Into<String>, description: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            summary: summary.into(),
            description: description.into(),
            labels,
        }
    }
}

/// Estimate for one story, with the features that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub summary: String,
    pub description: String,
    pub labels: Vec<String>,
    /// In [1.0, 100.0], rounded to one decimal
    pub complexity_score: f64,
    /// One of 1, 2, 3, 5, 8, 13, 21 with the default scale
    pub story_points: u32,
    pub analysis: Analysis,
}

/// Feature breakdown as exposed to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub token_count: usize,
    pub sentence_count: usize,
    /// Rounded to two decimals
    pub avg_sentence_len: f64,
    pub uncertainty_factor: usize,
    pub technical_factor: usize,
    pub entity_factor: usize,
    pub label_factor: usize,
    pub short_sentence_penalty: usize,
}

impl From<&FeatureSet> for Analysis {
    fn from(features: &FeatureSet) -> Self {
        Self {
            token_count: features.token_count,
            sentence_count: features.sentence_count,
            avg_sentence_len: round_to(features.avg_sentence_len, 2),
            uncertainty_factor: features.uncertainty_hits,
            technical_factor: features.technical_hits,
            entity_factor: features.entity_count,
            label_factor: features.label_factor,
            short_sentence_penalty: features.short_sentence_penalty,
        }
    }
}
