//! Linguistic feature extraction
//!
//! Turns analyzer output plus the raw label list into the scalar features
//! the scorer consumes.

use std::collections::HashSet;

use crate::analyzer::{AnalyzedText, TextAnalyzer};
use crate::config::KeywordConfig;
use crate::error::Result;

/// Sentences shorter than this count towards `short_sentence_penalty`
pub const SHORT_SENTENCE_TOKENS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    /// Never zero
    pub token_count: usize,
    /// Never zero
    pub sentence_count: usize,
    pub avg_sentence_len: f64,
    pub short_sentence_penalty: usize,
    pub entity_count: usize,
    pub uncertainty_hits: usize,
    pub technical_hits: usize,
    pub label_factor: usize,
}

/// Lowercased keyword sets, built once at startup
#[derive(Debug, Clone)]
pub struct KeywordTables {
    uncertainty: HashSet<String>,
    technical: HashSet<String>,
}

impl KeywordTables {
    pub fn from_config(config: &KeywordConfig) -> Self {
        Self {
            uncertainty: lowercase_set(&config.uncertainty),
            technical: lowercase_set(&config.technical),
        }
    }

    /// Tokens whose lowercased text is exactly an uncertainty keyword
    pub fn uncertainty_hits(&self, tokens: &[String]) -> usize {
        count_hits(&self.uncertainty, tokens)
    }

    pub fn technical_hits(&self, tokens: &[String]) -> usize {
        count_hits(&self.technical, tokens)
    }
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self::from_config(&KeywordConfig::default())
    }
}

fn lowercase_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

fn count_hits(keywords: &HashSet<String>, tokens: &[String]) -> usize {
    tokens
        .iter()
        .filter(|token| keywords.contains(&token.to_lowercase()))
        .count()
}

/// Run the analyzer on `text` and derive features. No partial result on failure.
pub fn extract(
    analyzer: &dyn TextAnalyzer,
    keywords: &KeywordTables,
    text: &str,
    labels: &[String],
) -> Result<FeatureSet> {
    let doc = analyzer.analyze(text)?;
    Ok(features_from(&doc, keywords, labels))
}

pub fn features_from(doc: &AnalyzedText, keywords: &KeywordTables, labels: &[String]) -> FeatureSet {
    let token_count = doc.tokens.len().max(1);
    // The floor only guards the division below; it is not a real sentence
    let sentence_count = doc.sentences.len().max(1);

    FeatureSet {
        token_count,
        sentence_count,
        avg_sentence_len: token_count as f64 / sentence_count as f64,
        short_sentence_penalty: doc
            .sentence_lengths()
            .filter(|&len| len < SHORT_SENTENCE_TOKENS)
            .count(),
        entity_count: doc.entities.len(),
        uncertainty_hits: keywords.uncertainty_hits(&doc.tokens),
        technical_hits: keywords.technical_hits(&doc.tokens),
        label_factor: labels.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{EntitySpan, RuleBasedAnalyzer};
    use crate::error::EstimateError;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    struct FailingAnalyzer;

    impl TextAnalyzer for FailingAnalyzer {
        fn name(&self) -> &str {
            "failing"
        }

        fn analyze(&self, _text: &str) -> Result<AnalyzedText> {
            Err(EstimateError::TextAnalysis("model unavailable".to_string()))
        }
    }

    #[test]
    fn test_empty_document_floors_counts() {
        let features = features_from(&AnalyzedText::default(), &KeywordTables::default(), &[]);

        assert_eq!(features.token_count, 1);
        assert_eq!(features.sentence_count, 1);
        assert_eq!(features.avg_sentence_len, 1.0);
        // No real sentence exists, so nothing is short
        assert_eq!(features.short_sentence_penalty, 0);
        assert_eq!(features.entity_count, 0);
    }

    #[test]
    fn test_counts_from_document() {
        let doc = AnalyzedText {
            tokens: tokens(&[
                "Maybe", "use", "Redis", ".", "The", "cache", "should", "not", "expire", "too",
                "early", ".",
            ]),
            sentences: vec![0..4, 4..12],
            entities: vec![EntitySpan {
                text: "Redis".to_string(),
                start: 2,
                end: 3,
            }],
        };
        let labels = tokens(&["backend", "backend"]);
        let features = features_from(&doc, &KeywordTables::default(), &labels);

        assert_eq!(features.token_count, 12);
        assert_eq!(features.sentence_count, 2);
        assert_eq!(features.avg_sentence_len, 6.0);
        assert_eq!(features.short_sentence_penalty, 1);
        assert_eq!(features.entity_count, 1);
        assert_eq!(features.uncertainty_hits, 2);
        assert_eq!(features.technical_hits, 2);
        assert_eq!(features.label_factor, 2);
    }

    #[test]
    fn test_keyword_match_is_exact_per_token() {
        let keywords = KeywordTables::default();
        // Substrings and stems do not match
        assert_eq!(keywords.technical_hits(&tokens(&["APIs", "apiary", "caching", "DB"])), 2);
        // Multi-word phrases cannot match single tokens
        assert_eq!(keywords.uncertainty_hits(&tokens(&["to", "be", "decided"])), 0);
        assert_eq!(keywords.uncertainty_hits(&tokens(&["To be decided"])), 1);
    }

    #[test]
    fn test_extract_runs_analyzer() {
        let analyzer = RuleBasedAnalyzer::default();
        let features = extract(&analyzer, &KeywordTables::default(), "maybe", &[]).unwrap();

        assert_eq!(features.token_count, 1);
        assert_eq!(features.uncertainty_hits, 1);
        assert_eq!(features.short_sentence_penalty, 1);
    }

    #[test]
    fn test_extract_propagates_analysis_failure() {
        let err = extract(&FailingAnalyzer, &KeywordTables::default(), "text", &[]).unwrap_err();
        assert!(matches!(err, EstimateError::TextAnalysis(_)));
    }
}
