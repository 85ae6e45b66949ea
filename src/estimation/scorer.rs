//! Complexity scoring formula
//!
//! A sub-linear length base plus linear terms for each risk signal,
//! clamped to [MIN_SCORE, MAX_SCORE].

use super::features::FeatureSet;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 100.0;

const LENGTH_WEIGHT: f64 = 20.0;
const UNCERTAINTY_WEIGHT: f64 = 6.0;
const TECHNICAL_WEIGHT: f64 = 4.0;
const ENTITY_WEIGHT: f64 = 2.0;
const LABEL_WEIGHT: f64 = 1.5;
const LONG_SENTENCE_WEIGHT: f64 = 0.5;
/// Average sentence length above which run-on sentences add to the score
const LONG_SENTENCE_TOKENS: f64 = 20.0;
// TODO: cap or scale this for very long texts once there is data to tune against
const SHORT_SENTENCE_WEIGHT: f64 = 1.0;

/// Weighted sum of features before clamping
pub fn raw_score(features: &FeatureSet) -> f64 {
    let base = LENGTH_WEIGHT * (features.token_count as f64 + 1.0).log2();

    base + UNCERTAINTY_WEIGHT * features.uncertainty_hits as f64
        + TECHNICAL_WEIGHT * features.technical_hits as f64
        + ENTITY_WEIGHT * features.entity_count as f64
        + LABEL_WEIGHT * features.label_factor as f64
        + LONG_SENTENCE_WEIGHT * (features.avg_sentence_len - LONG_SENTENCE_TOKENS).max(0.0)
        + SHORT_SENTENCE_WEIGHT * features.short_sentence_penalty as f64
}

/// Bounded complexity score in [1.0, 100.0]
pub fn score(features: &FeatureSet) -> f64 {
    raw_score(features).clamp(MIN_SCORE, MAX_SCORE)
}
