//! # Text Processing Module
//!
//! ## Purpose
//! Tokenization and sentence splitting for legal documents and queries. The
//! same tokenizer is used for indexing and for query processing so that term
//! matching is symmetric.
//!
//! ## Input/Output Specification
//! - **Input**: Raw document text or query strings
//! - **Output**: Normalized terms, sentence lists
//! - **Normalization**: NFC Unicode normalization, case folding, punctuation
//!   stripping via word extraction
//!
//! ## Key Features
//! - Deterministic, pure tokenization (no shared mutable state)
//! - Sentence splitting on terminal punctuation for snippet windows
//! - No stemming and no stopword removal, keeping scoring predictable

use crate::errors::{Result, SearchError};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Text processing pipeline shared by indexing and query paths
pub struct Tokenizer {
    word_regex: Regex,
    sentence_regex: Regex,
}

impl Tokenizer {
    /// Create a new tokenizer, compiling patterns once
    pub fn new() -> Result<Self> {
        let word_regex = Regex::new(r"\w+").map_err(|e| SearchError::Internal {
            message: format!("Invalid word regex: {}", e),
        })?;
        let sentence_regex = Regex::new(r"[.!?]+\s+").map_err(|e| SearchError::Internal {
            message: format!("Invalid sentence regex: {}", e),
        })?;

        Ok(Self {
            word_regex,
            sentence_regex,
        })
    }

    /// Normalize text into a sequence of comparable terms.
    ///
    /// Applies NFC normalization and case folding, then extracts word runs,
    /// dropping punctuation and empty tokens. Deterministic and pure.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.nfc().collect::<String>().to_lowercase();

        self.word_regex
            .find_iter(&normalized)
            .map(|m| m.as_str().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Split text into trimmed, non-empty sentences
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        self.sentence_regex
            .split(text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new().unwrap()
    }

    #[test]
    fn test_case_folds_and_strips_punctuation() {
        let tokens = tokenizer().tokenize("Breach of CONTRACT, damages!");
        assert_eq!(tokens, vec!["breach", "of", "contract", "damages"]);
    }

    #[test]
    fn test_keeps_numbers() {
        let tokens = tokenizer().tokenize("Section 230 applies.");
        assert_eq!(tokens, vec!["section", "230", "applies"]);
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert!(tokenizer().tokenize("").is_empty());
        assert!(tokenizer().tokenize("... !! --- ??").is_empty());
    }

    #[test]
    fn test_unicode_normalization() {
        // Composed and decomposed forms of "café" tokenize identically
        let composed = tokenizer().tokenize("caf\u{e9}");
        let decomposed = tokenizer().tokenize("cafe\u{301}");
        assert_eq!(composed, decomposed);
    }

    #[test]
    fn test_no_stemming() {
        let tokens = tokenizer().tokenize("contracts contracting");
        assert_eq!(tokens, vec!["contracts", "contracting"]);
    }

    #[test]
    fn test_sentence_split() {
        let sentences = tokenizer()
            .split_sentences("Duty of care was breached. Damages followed! Was there causation?");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "Duty of care was breached");
        assert!(sentences[2].starts_with("Was there causation"));
    }

    #[test]
    fn test_sentence_split_single_sentence() {
        let sentences = tokenizer().split_sentences("No terminal punctuation here");
        assert_eq!(sentences, vec!["No terminal punctuation here"]);
    }
}
