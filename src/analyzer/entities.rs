//! Heuristic named-entity recognizer
//!
//! Marks proper-noun runs, acronyms, product-style identifiers (`OAuth2`,
//! `GitHub`) and configured gazetteer terms. Spans never cross a sentence
//! boundary and never overlap.

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

use super::tokenizer;
use super::EntitySpan;

lazy_static! {
    static ref ACRONYM: Regex = Regex::new(r"^[A-Z][A-Z0-9&]+$").unwrap();
    static ref TITLE_CASE: Regex = Regex::new(r"^[A-Z][a-z0-9]+$").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct EntityRecognizer {
    /// Lowercased token sequences, longest first
    gazetteer: Vec<Vec<String>>,
}

impl EntityRecognizer {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut gazetteer: Vec<Vec<String>> = terms
            .into_iter()
            .map(|term| {
                tokenizer::tokenize(term.as_ref())
                    .into_iter()
                    .map(|t| t.to_lowercase())
                    .collect::<Vec<_>>()
            })
            .filter(|seq| !seq.is_empty())
            .collect();
        gazetteer.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        gazetteer.dedup();

        Self { gazetteer }
    }

    pub fn gazetteer_len(&self) -> usize {
        self.gazetteer.len()
    }

    pub fn recognize(&self, tokens: &[String], sentences: &[Range<usize>]) -> Vec<EntitySpan> {
        let mut spans = Vec::new();

        for sentence in sentences {
            let mut i = sentence.start;
            while i < sentence.end {
                if let Some(len) = self.gazetteer_match(tokens, i, sentence.end) {
                    spans.push(span(tokens, i..i + len));
                    i += len;
                    continue;
                }

                if is_entity_token(&tokens[i], i == sentence.start) {
                    let mut j = i + 1;
                    while j < sentence.end
                        && is_entity_token(&tokens[j], false)
                        && self.gazetteer_match(tokens, j, sentence.end).is_none()
                    {
                        j += 1;
                    }
                    spans.push(span(tokens, i..j));
                    i = j;
                    continue;
                }

                i += 1;
            }
        }

        spans
    }

    fn gazetteer_match(&self, tokens: &[String], at: usize, end: usize) -> Option<usize> {
        self.gazetteer
            .iter()
            .find(|seq| {
                at + seq.len() <= end
                    && seq
                        .iter()
                        .zip(&tokens[at..at + seq.len()])
                        .all(|(term, token)| token.to_lowercase() == *term)
            })
            .map(Vec::len)
    }
}

fn span(tokens: &[String], range: Range<usize>) -> EntitySpan {
    EntitySpan {
        text: tokens[range.clone()].join(" "),
        start: range.start,
        end: range.end,
    }
}

fn is_entity_token(token: &str, sentence_initial: bool) -> bool {
    if ACRONYM.is_match(token) {
        return true;
    }

    if IDENTIFIER.is_match(token) {
        let inner_upper = token.chars().skip(1).any(|c| c.is_ascii_uppercase());
        let has_upper = token.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = token.chars().any(|c| c.is_ascii_digit());
        if inner_upper || (has_upper && has_digit) {
            return true;
        }
    }

    // A capital at sentence start says nothing
    !sentence_initial && TITLE_CASE.is_match(token)
}
