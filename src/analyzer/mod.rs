//! Text analysis
//!
//! The estimator depends only on [`TextAnalyzer`]: anything that can turn
//! raw text into tokens, sentences and entity spans. The bundled
//! [`RuleBasedAnalyzer`] handles English without an external model.

pub mod entities;
pub mod rule_based;
pub mod tokenizer;

use std::ops::Range;
use std::sync::Arc;

use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::error::Result;

pub use rule_based::RuleBasedAnalyzer;

/// A recognized named entity, as a half-open token range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Analyzer output for one text
#[derive(Debug, Clone, Default)]
pub struct AnalyzedText {
    /// Token surface texts in document order
    pub tokens: Vec<String>,
    /// Contiguous token ranges, one per sentence
    pub sentences: Vec<Range<usize>>,
    pub entities: Vec<EntitySpan>,
}

impl AnalyzedText {
    pub fn sentence_tokens(&self, index: usize) -> Option<&[String]> {
        self.sentences
            .get(index)
            .and_then(|range| self.tokens.get(range.clone()))
    }

    pub fn sentence_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.sentences.iter().map(|range| range.len())
    }
}

/// Tokenizer, sentence segmenter and entity recognizer in one capability.
///
/// Implementations are loaded once and shared across concurrent requests.
pub trait TextAnalyzer: Send + Sync {
    /// Model name reported by the readiness check
    fn name(&self) -> &str;

    fn analyze(&self, text: &str) -> Result<AnalyzedText>;
}

/// Build the configured analyzer. Errors here are fatal at startup.
pub fn load(config: &AnalyzerConfig) -> Result<Arc<dyn TextAnalyzer>> {
    let analyzer = RuleBasedAnalyzer::from_config(config)?;
    tracing::info!(
        "Loaded text analyzer '{}' ({} gazetteer terms)",
        analyzer.name(),
        analyzer.gazetteer_len()
    );
    Ok(Arc::new(analyzer))
}
