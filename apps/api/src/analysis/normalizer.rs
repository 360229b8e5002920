//! Text Normalizer: raw text → `TokenSequence`.
//!
//! Lowercases, removes punctuation (keeping internal hyphens such as `full-stack`),
//! splits on whitespace and filters stop words and short tokens.

use std::collections::HashSet;

use crate::analysis::{AnalysisError, ExtractedText};
use crate::config::AnalysisConfig;

/// Ordered, normalized tokens of one document.
///
/// Every token is lowercase, non-empty, at least `min_token_length` chars long
/// and not a stop word. Built only by `Normalizer::normalize`, so never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Distinct tokens, for membership tests.
    pub fn distinct(&self) -> HashSet<&str> {
        self.tokens.iter().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    stop_words: HashSet<String>,
    min_token_length: usize,
}

impl Normalizer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            stop_words: config.stop_words.clone(),
            min_token_length: config.min_token_length,
        }
    }

    /// Normalizes `text`, failing with `EmptyInput` when nothing survives filtering.
    pub fn normalize(&self, text: &ExtractedText) -> Result<TokenSequence, AnalysisError> {
        let tokens = self.tokenize(&text.content);
        if tokens.is_empty() {
            return Err(AnalysisError::EmptyInput {
                document: text.source,
            });
        }
        Ok(TokenSequence { tokens })
    }

    /// Tokenizes without the emptiness check.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        clean(text)
            .split_whitespace()
            .map(|raw| raw.trim_matches('-'))
            .filter(|token| token.chars().count() >= self.min_token_length.max(1))
            .filter(|token| !self.stop_words.contains(*token))
            .map(str::to_string)
            .collect()
    }
}

/// Lowercases and deletes everything that is not alphanumeric, whitespace, `-`
/// or `_`. Symbols inside a word join its parts (`Node.js` -> `nodejs`); only
/// whitespace separates tokens.
fn clean(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '-' | '_' => cleaned.push(c),
            c if c.is_alphanumeric() => cleaned.extend(c.to_lowercase()),
            c if c.is_whitespace() => cleaned.push(' '),
            _ => {}
        }
    }
    cleaned
}
