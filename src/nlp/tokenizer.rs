//! Whitespace tokenization
//!
//! Splits text on Unicode whitespace, keeping attached punctuation, and
//! records a normalized (optionally lower-cased) form of every token for use
//! as a graph key.

use crate::types::Token;

/// A whitespace tokenizer with optional case folding
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Lower-case the normalized form of each token
    case_fold: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer that folds case
    pub fn new() -> Self {
        Self { case_fold: true }
    }

    /// Enable or disable case folding
    pub fn with_case_fold(mut self, case_fold: bool) -> Self {
        self.case_fold = case_fold;
        self
    }

    /// Tokenize text on whitespace
    ///
    /// Line breaks are whitespace like any other, so a multi-line corpus is
    /// one continuous token sequence.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .enumerate()
            .map(|(idx, word)| Token::new(word, self.normalize(word), idx))
            .collect()
    }

    /// Normalized form of a single word
    pub fn normalize(&self, word: &str) -> String {
        if self.case_fold {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }
}
