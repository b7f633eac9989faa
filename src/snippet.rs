//! # Snippet Extraction Module
//!
//! ## Purpose
//! Locates query-term occurrences in a document's raw text and extracts
//! readable context windows around them for display and summarization.
//!
//! ## Input/Output Specification
//! - **Input**: Raw document text, normalized query tokens
//! - **Output**: At most `max_snippets` snippets, ordered by first occurrence
//!   in the document
//! - **Matching**: Case-insensitive whole-word matching, decided by running
//!   the same tokenizer over the candidate text
//!
//! ## Key Features
//! - Sentence-sized windows trimmed to word boundaries
//! - Long sentences are windowed around the first matched term so the match
//!   always survives truncation
//! - One snippet per sentence, deduplicating overlapping occurrences

use crate::config::SnippetConfig;
use crate::text_processing::Tokenizer;
use std::collections::HashSet;

/// Extracts bounded context windows around query-term occurrences
pub struct SnippetExtractor {
    config: SnippetConfig,
}

impl SnippetExtractor {
    pub fn new(config: SnippetConfig) -> Self {
        Self { config }
    }

    /// Extract up to `max_snippets` snippets containing at least one query
    /// token, in order of first occurrence. Returns an empty sequence when no
    /// occurrence is found.
    pub fn extract(
        &self,
        raw_text: &str,
        query_tokens: &[String],
        tokenizer: &Tokenizer,
    ) -> Vec<String> {
        let query: HashSet<&str> = query_tokens.iter().map(String::as_str).collect();
        if query.is_empty() {
            return Vec::new();
        }

        let mut snippets = Vec::new();

        for sentence in tokenizer.split_sentences(raw_text) {
            if snippets.len() >= self.config.max_snippets {
                break;
            }

            let words: Vec<&str> = sentence.split_whitespace().collect();
            let hit = words.iter().position(|word| {
                tokenizer
                    .tokenize(word)
                    .iter()
                    .any(|t| query.contains(t.as_str()))
            });

            if let Some(hit) = hit {
                snippets.push(self.window_around(&words, hit));
            }
        }

        snippets
    }

    /// Build a word-boundary window around the matched word, growing outward
    /// until the character budget is exhausted
    fn window_around(&self, words: &[&str], hit: usize) -> String {
        let budget = self.config.max_snippet_chars;
        let mut start = hit;
        let mut end = hit + 1;
        let mut len = words[hit].chars().count();

        loop {
            let grew_left = if start > 0 {
                let cost = words[start - 1].chars().count() + 1;
                if len + cost <= budget {
                    start -= 1;
                    len += cost;
                    true
                } else {
                    false
                }
            } else {
                false
            };

            let grew_right = if end < words.len() {
                let cost = words[end].chars().count() + 1;
                if len + cost <= budget {
                    end += 1;
                    len += cost;
                    true
                } else {
                    false
                }
            } else {
                false
            };

            if !grew_left && !grew_right {
                break;
            }
        }

        let mut snippet = words[start..end].join(" ");
        if start > 0 {
            snippet = format!("...{}", snippet);
        }
        if end < words.len() {
            snippet = format!("{}...", snippet);
        }
        snippet
    }
}
