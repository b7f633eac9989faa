//! # Summary Module
//!
//! ## Purpose
//! Builds a short extractive summary from the top-ranked search results by
//! concatenating existing source text, never generating new text.
//!
//! ## Input/Output Specification
//! - **Input**: Ranked search hits with their snippets
//! - **Output**: A single summary string, possibly empty
//! - **Determinism**: The summary derives from the single highest-ranked hit;
//!   rank order already breaks score ties by lowest document id
//!
//! The deliberate alternative to generative summarization: explainable,
//! reproducible, and testable.

use crate::config::SummaryConfig;
use crate::search::SearchHit;
use crate::utils::TextUtils;

/// Produces extractive summaries from ranked results
pub struct Summarizer {
    config: SummaryConfig,
}

impl Summarizer {
    pub fn new(config: SummaryConfig) -> Self {
        Self { config }
    }

    /// Concatenate the leading snippets of the top-ranked hit, trimmed to the
    /// configured maximum length. Returns an empty string when there are no
    /// hits or the top hit carries no snippets.
    pub fn summarize(&self, ranked_hits: &[SearchHit]) -> String {
        let Some(top) = ranked_hits.first() else {
            return String::new();
        };

        if top.snippets.is_empty() {
            return String::new();
        }

        let joined = top.snippets.join(" ");
        TextUtils::truncate_at_word(&joined, self.config.max_summary_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(doc_id: &str, score: f64, snippets: &[&str]) -> SearchHit {
        SearchHit {
            doc_id: doc_id.to_string(),
            title: doc_id.to_string(),
            score,
            snippets: snippets.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn summarizer(max_chars: usize) -> Summarizer {
        Summarizer::new(SummaryConfig {
            max_summary_chars: max_chars,
        })
    }

    #[test]
    fn test_summary_from_top_hit_only() {
        let hits = vec![
            hit("doc1", 0.3, &["Breach of contract occurred.", "Damages were awarded."]),
            hit("doc2", 0.1, &["Unrelated snippet."]),
        ];
        let summary = summarizer(600).summarize(&hits);
        assert_eq!(
            summary,
            "Breach of contract occurred. Damages were awarded."
        );
        assert!(!summary.contains("Unrelated"));
    }

    #[test]
    fn test_empty_hits_yield_empty_summary() {
        assert_eq!(summarizer(600).summarize(&[]), "");
    }

    #[test]
    fn test_top_hit_without_snippets_yields_empty_summary() {
        let hits = vec![hit("doc1", 0.2, &[])];
        assert_eq!(summarizer(600).summarize(&hits), "");
    }

    #[test]
    fn test_summary_is_length_bounded() {
        let long_snippet = "word ".repeat(300);
        let hits = vec![hit("doc1", 0.5, &[long_snippet.trim()])];
        let summary = summarizer(100).summarize(&hits);
        assert!(summary.chars().count() <= 100);
        assert!(summary.ends_with("..."));
    }
}
