//! Rule-based English analyzer

use std::path::Path;

use crate::config::AnalyzerConfig;
use crate::error::{EstimateError, Result};

use super::entities::EntityRecognizer;
use super::tokenizer;
use super::{AnalyzedText, TextAnalyzer};

#[derive(Debug, Clone)]
pub struct RuleBasedAnalyzer {
    name: String,
    max_text_chars: usize,
    recognizer: EntityRecognizer,
}

impl RuleBasedAnalyzer {
    pub fn new(name: impl Into<String>, max_text_chars: usize, recognizer: EntityRecognizer) -> Self {
        Self {
            name: name.into(),
            max_text_chars,
            recognizer,
        }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        if config.max_text_chars == 0 {
            return Err(EstimateError::ModelInitialization(
                "max_text_chars must be greater than zero".to_string(),
            ));
        }

        let mut terms = config.entity_terms.clone();
        if let Some(path) = &config.gazetteer_path {
            terms.extend(read_gazetteer(path)?);
        }

        Ok(Self::new(
            config.model.clone(),
            config.max_text_chars,
            EntityRecognizer::new(terms),
        ))
    }

    pub fn gazetteer_len(&self) -> usize {
        self.recognizer.gazetteer_len()
    }
}

impl Default for RuleBasedAnalyzer {
    fn default() -> Self {
        let config = AnalyzerConfig::default();
        Self::new(
            config.model,
            config.max_text_chars,
            EntityRecognizer::new(config.entity_terms),
        )
    }
}

impl TextAnalyzer for RuleBasedAnalyzer {
    fn name(&self) -> &str {
        &self.name
    }

    fn analyze(&self, text: &str) -> Result<AnalyzedText> {
        let length = text.chars().count();
        if length > self.max_text_chars {
            return Err(EstimateError::TextAnalysis(format!(
                "Text of length {} exceeds maximum of {} characters",
                length, self.max_text_chars
            )));
        }

        let segmented = tokenizer::segment(text);
        let entities = self
            .recognizer
            .recognize(&segmented.tokens, &segmented.sentences);

        Ok(AnalyzedText {
            tokens: segmented.tokens,
            sentences: segmented.sentences,
            entities,
        })
    }
}

fn read_gazetteer(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        EstimateError::ModelInitialization(format!(
            "could not read gazetteer {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
