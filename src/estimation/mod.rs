//! Story point estimation
//!
//! Pipeline: assemble the story text, extract linguistic features with the
//! shared analyzer, score them, and map the score onto story points. Every
//! call is independent; the estimator holds only read-only tables.

pub mod assembler;
pub mod features;
pub mod points;
pub mod scorer;
pub mod types;

use std::sync::Arc;

use crate::analyzer::{self, TextAnalyzer};
use crate::config::Config;
use crate::error::Result;
use crate::utils::{preview, round_to};

pub use features::{FeatureSet, KeywordTables};
pub use points::PointScale;
pub use types::{Analysis, ScoreResult, Story};

#[derive(Clone)]
pub struct Estimator {
    analyzer: Arc<dyn TextAnalyzer>,
    keywords: KeywordTables,
    scale: PointScale,
}

impl Estimator {
    pub fn new(analyzer: Arc<dyn TextAnalyzer>, keywords: KeywordTables, scale: PointScale) -> Self {
        Self {
            analyzer,
            keywords,
            scale,
        }
    }

    /// Load the analyzer and tables from config.
    /// Fails with `ModelInitialization` if the analyzer cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            analyzer::load(&config.analyzer)?,
            KeywordTables::from_config(&config.keywords),
            PointScale::from_config(&config.points),
        ))
    }

    pub fn analyzer_name(&self) -> &str {
        self.analyzer.name()
    }

    pub fn scale(&self) -> &PointScale {
        &self.scale
    }

    pub fn estimate(&self, story: &Story) -> Result<ScoreResult> {
        let text = assembler::assemble(&story.summary, &story.description, &story.labels);
        let features = features::extract(self.analyzer.as_ref(), &self.keywords, &text, &story.labels)?;

        let complexity = scorer::score(&features);
        let story_points = self.scale.map_to_points(complexity);

        tracing::debug!(
            summary = preview(&story.summary, 60),
            tokens = features.token_count,
            sentences = features.sentence_count,
            complexity,
            story_points,
            "Estimated story"
        );

        Ok(ScoreResult {
            summary: story.summary.clone(),
            description: story.description.clone(),
            labels: story.labels.clone(),
            complexity_score: round_to(complexity, 1),
            story_points,
            analysis: Analysis::from(&features),
        })
    }
}

impl std::fmt::Debug for Estimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Estimator")
            .field("analyzer", &self.analyzer.name())
            .field("keywords", &self.keywords)
            .field("scale", &self.scale)
            .finish()
    }
}
