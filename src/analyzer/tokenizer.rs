//! Rule-based English tokenizer and sentence segmenter
//!
//! Whitespace-delimited chunks are split further into prefix punctuation,
//! a core word, infix hyphens/slashes, clitics, and suffix punctuation.
//! Sentence boundaries fall after terminal punctuation and at blank lines.

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n[ \t\r]*\n").unwrap();
    static ref DOTTED_ABBREVIATION: Regex = Regex::new(r"^(?:[A-Za-z]\.){2,}$").unwrap();
}

const PREFIX_PUNCT: &[char] = &['(', '[', '{', '"', '\'', '“', '‘', '«', '<', '*', '#'];
const SUFFIX_PUNCT: &[char] = &[
    ')', ']', '}', '"', '\'', '”', '’', '»', '>', ',', ';', ':', '!', '?', '.', '…', '*',
];
const CLOSING_PUNCT: &[&str] = &[")", "]", "}", "\"", "'", "”", "’", "»"];
const CLITICS: &[&str] = &["'s", "'re", "'ll", "'ve", "'d", "'m"];

/// Abbreviations that keep their trailing period
const ABBREVIATIONS: &[&str] = &[
    "etc.", "vs.", "approx.", "dept.", "mr.", "mrs.", "ms.", "dr.", "inc.", "ltd.", "co.",
    "jr.", "sr.", "no.", "fig.", "misc.",
];

/// Tokens and sentence boundaries for one piece of text
#[derive(Debug, Clone, Default)]
pub struct Segmented {
    pub tokens: Vec<String>,
    /// Token index ranges, contiguous and in order
    pub sentences: Vec<Range<usize>>,
}

/// Tokenize `text` and split it into sentences
pub fn segment(text: &str) -> Segmented {
    let mut out = Segmented::default();

    for paragraph in PARAGRAPH_BREAK.split(text) {
        let mut sentence_start = out.tokens.len();
        let mut tokens = Vec::new();
        for chunk in paragraph.split_whitespace() {
            split_chunk(chunk, &mut tokens);
        }

        let mut i = 0;
        while i < tokens.len() {
            let ends_sentence = is_terminal(&tokens[i]);
            out.tokens.push(std::mem::take(&mut tokens[i]));
            i += 1;

            if ends_sentence {
                // Closing quotes and brackets belong to the sentence they close
                while i < tokens.len() && CLOSING_PUNCT.contains(&tokens[i].as_str()) {
                    out.tokens.push(std::mem::take(&mut tokens[i]));
                    i += 1;
                }
                out.sentences.push(sentence_start..out.tokens.len());
                sentence_start = out.tokens.len();
            }
        }

        if sentence_start < out.tokens.len() {
            out.sentences.push(sentence_start..out.tokens.len());
        }
    }

    out
}

/// Tokenize without sentence segmentation
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        split_chunk(chunk, &mut tokens);
    }
    tokens
}

fn is_terminal_char(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_terminal(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| is_terminal_char(c) || c == '…')
}

fn split_chunk(chunk: &str, tokens: &mut Vec<String>) {
    let mut rest = chunk;

    // Prefixes, one char each
    while let Some(c) = rest.chars().next() {
        if PREFIX_PUNCT.contains(&c) && rest.len() > c.len_utf8() {
            tokens.push(c.to_string());
            rest = &rest[c.len_utf8()..];
        } else {
            break;
        }
    }

    // Suffixes, collected in reverse
    let mut suffixes: Vec<String> = Vec::new();
    loop {
        if rest.is_empty() || keeps_trailing_period(rest) {
            break;
        }
        let Some(c) = rest.chars().next_back() else {
            break;
        };
        if !SUFFIX_PUNCT.contains(&c) {
            break;
        }
        // Runs of terminal marks stay together ("...", "?!")
        let run_start = rest
            .char_indices()
            .rev()
            .take_while(|&(_, ch)| is_terminal_char(c) && is_terminal_char(ch))
            .last()
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len() - c.len_utf8());
        if run_start == 0 {
            // The whole chunk is punctuation
            break;
        }
        suffixes.push(rest[run_start..].to_string());
        rest = &rest[..run_start];
    }

    if !rest.is_empty() {
        split_core(rest, tokens);
    }
    tokens.extend(suffixes.into_iter().rev());
}

fn keeps_trailing_period(word: &str) -> bool {
    if !word.ends_with('.') {
        return false;
    }
    DOTTED_ABBREVIATION.is_match(word) || ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

/// Split infix hyphens/slashes between word characters, then clitics
fn split_core(core: &str, tokens: &mut Vec<String>) {
    let chars: Vec<(usize, char)> = core.char_indices().collect();
    let mut piece_start = 0;

    for (pos, &(idx, c)) in chars.iter().enumerate() {
        if !matches!(c, '-' | '/' | '–' | '—') || pos == 0 || pos + 1 >= chars.len() {
            continue;
        }
        let before = chars[pos - 1].1;
        let after = chars[pos + 1].1;
        if before.is_alphanumeric() && after.is_alphabetic() {
            split_clitics(&core[piece_start..idx], tokens);
            tokens.push(c.to_string());
            piece_start = idx + c.len_utf8();
        }
    }

    split_clitics(&core[piece_start..], tokens);
}

fn split_clitics(word: &str, tokens: &mut Vec<String>) {
    if word.is_empty() {
        return;
    }

    let normalized = word.replace('’', "'");
    let lower = normalized.to_lowercase();

    if lower.len() > 3 && lower.ends_with("n't") {
        let cut = normalized.len() - 3;
        tokens.push(normalized[..cut].to_string());
        tokens.push(normalized[cut..].to_string());
        return;
    }

    for clitic in CLITICS {
        if lower.len() > clitic.len() && lower.ends_with(clitic) {
            let cut = normalized.len() - clitic.len();
            tokens.push(normalized[..cut].to_string());
            tokens.push(normalized[cut..].to_string());
            return;
        }
    }

    tokens.push(word.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_texts(seg: &Segmented) -> Vec<Vec<&str>> {
        seg.sentences
            .iter()
            .map(|r| seg.tokens[r.clone()].iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_empty_text() {
        let seg = segment("");
        assert!(seg.tokens.is_empty());
        assert!(seg.sentences.is_empty());

        let seg = segment("   \n\n  ");
        assert!(seg.tokens.is_empty());
        assert!(seg.sentences.is_empty());
    }

    #[test]
    fn test_punctuation_split() {
        assert_eq!(
            tokenize("Hello, world! (really)"),
            vec!["Hello", ",", "world", "!", "(", "really", ")"]
        );
        assert_eq!(tokenize("Wait..."), vec!["Wait", "..."]);
        assert_eq!(tokenize("Really?!"), vec!["Really", "?!"]);
        assert_eq!(tokenize("\"quoted.\""), vec!["\"", "quoted", ".", "\""]);
    }

    #[test]
    fn test_abbreviations_keep_period() {
        assert_eq!(tokenize("e.g. caching"), vec!["e.g.", "caching"]);
        assert_eq!(tokenize("logs, metrics, etc."), vec!["logs", ",", "metrics", ",", "etc."]);
        assert_eq!(tokenize("version 1.2.3"), vec!["version", "1.2.3"]);
    }

    #[test]
    fn test_infix_and_clitics() {
        assert_eq!(tokenize("OAuth2-based"), vec!["OAuth2", "-", "based"]);
        assert_eq!(tokenize("client/server"), vec!["client", "/", "server"]);
        assert_eq!(tokenize("don't"), vec!["do", "n't"]);
        assert_eq!(tokenize("user's"), vec!["user", "'s"]);
        assert_eq!(tokenize("we’ll"), vec!["we", "'ll"]);
        // Leading hyphen and ranges of numbers are left alone
        assert_eq!(tokenize("-v 1-2"), vec!["-v", "1-2"]);
    }

    #[test]
    fn test_sentence_segmentation() {
        let seg = segment("Add login. Is it secure? Yes!");
        assert_eq!(
            sentence_texts(&seg),
            vec![
                vec!["Add", "login", "."],
                vec!["Is", "it", "secure", "?"],
                vec!["Yes", "!"],
            ]
        );
    }

    #[test]
    fn test_trailing_sentence_without_terminal() {
        let seg = segment("First one. second part with no end");
        assert_eq!(seg.sentences.len(), 2);
        assert_eq!(seg.sentences[1], 3..8);
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let seg = segment("He said \"done.\" Then left.");
        assert_eq!(
            sentence_texts(&seg)[0],
            vec!["He", "said", "\"", "done", ".", "\""]
        );
    }

    #[test]
    fn test_blank_line_breaks_sentence() {
        let seg = segment("Title line\n\nBody text here");
        assert_eq!(seg.sentences, vec![0..2, 2..5]);
    }

    #[test]
    fn test_sentences_cover_all_tokens() {
        let seg = segment("One. Two three!\n\nFour \"five\" six? seven");
        let covered: usize = seg.sentences.iter().map(|r| r.len()).sum();
        assert_eq!(covered, seg.tokens.len());
        for pair in seg.sentences.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}
