//! # Query Engine Module
//!
//! ## Purpose
//! Orchestrates the retrieval pipeline per request: tokenize the query, score
//! candidate documents, rank, truncate to top-K, extract snippets, build the
//! summary, and assemble the response with timing metadata.
//!
//! ## Input/Output Specification
//! - **Input**: Raw query strings
//! - **Output**: Ranked results with scores, snippets, summary, and metadata
//! - **Concurrency**: The engine is read-only after initialization, so any
//!   number of concurrent queries proceed without locks
//!
//! ## Pipeline
//! `Tokenizing -> Scoring -> Ranking -> Extracting -> Summarizing -> Responding`,
//! re-entered fresh per request with no persisted state between requests.

use crate::config::Config;
use crate::corpus::Corpus;
use crate::errors::{Result, SearchError};
use crate::index::Index;
use crate::scoring::{round_score, score_document};
use crate::snippet::SnippetExtractor;
use crate::summary::Summarizer;
use crate::text_processing::Tokenizer;
use crate::utils::Timer;
use crate::DocId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single ranked match for a query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Stable document identifier
    pub doc_id: DocId,
    /// Document title
    pub title: String,
    /// Non-negative relevance score, rounded for the wire
    pub score: f64,
    /// Context windows around query-term occurrences, in document order
    pub snippets: Vec<String>,
}

/// Response metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Wall-clock time spent answering the query
    pub took_ms: u64,
    /// Total number of documents in the corpus
    pub doc_count: usize,
}

/// Full query response; every field is always present so the wire contract
/// stays stable (empty string or array instead of an absent field)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Echoed raw query string
    pub query: String,
    /// Matches ordered by score descending, ties broken by ascending doc_id
    pub results: Vec<SearchHit>,
    /// Extractive summary from the top-ranked match, possibly empty
    pub summary: String,
    pub meta: ResponseMeta,
}

/// The query-time retrieval engine.
///
/// Owns the corpus and index, built exactly once at startup and strictly
/// read-only afterwards. Shared across request handlers via `Arc`.
pub struct QueryEngine {
    config: Arc<Config>,
    corpus: Corpus,
    index: Index,
    tokenizer: Tokenizer,
    snippets: SnippetExtractor,
    summarizer: Summarizer,
}

impl QueryEngine {
    /// Load the corpus and build the index. Called once at process startup;
    /// a failure here is fatal and the process must not begin serving.
    pub fn initialize(config: Arc<Config>) -> Result<Self> {
        let tokenizer = Tokenizer::new()?;
        let corpus = Corpus::load(&config.corpus)?;
        let index = Index::build(&corpus, &tokenizer);

        let snippets = SnippetExtractor::new(config.snippet.clone());
        let summarizer = Summarizer::new(config.summary.clone());

        Ok(Self {
            config,
            corpus,
            index,
            tokenizer,
            snippets,
            summarizer,
        })
    }

    /// Number of loaded corpus documents
    pub fn doc_count(&self) -> usize {
        self.corpus.len()
    }

    /// Answer a single query.
    ///
    /// Empty or whitespace-only queries are rejected with
    /// `InvalidSearchQuery`; the error is fatal to the request, never the
    /// process.
    pub fn handle_query(&self, raw_query: &str) -> Result<QueryResponse> {
        let timer = Timer::new("handle_query");

        let query = raw_query.trim();
        if query.is_empty() {
            return Err(SearchError::InvalidSearchQuery {
                query: raw_query.to_string(),
                reason: "Query must not be empty".to_string(),
            });
        }

        let query_tokens = self.tokenizer.tokenize(query);

        // Only documents reachable through the inverted mapping are scored;
        // everything else implicitly scores zero
        let mut scored: Vec<(DocId, f64)> = self
            .index
            .candidates(&query_tokens)
            .into_iter()
            .filter_map(|doc_id| {
                let stats = self.index.doc_stats(&doc_id)?;
                let score = score_document(stats, &query_tokens);
                (score > 0.0).then_some((doc_id, score))
            })
            .collect();

        // Explicit total order: score descending, doc_id ascending on ties
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(self.config.search.max_results);

        let mut results = Vec::with_capacity(scored.len());
        for (doc_id, score) in scored {
            let doc = self.corpus.get(&doc_id).ok_or_else(|| SearchError::Internal {
                message: format!("Indexed document '{}' missing from corpus", doc_id),
            })?;

            let snippets = self
                .snippets
                .extract(&doc.raw_text, &query_tokens, &self.tokenizer);

            results.push(SearchHit {
                doc_id,
                title: doc.title.clone(),
                score: round_score(score, self.config.search.round_decimals),
                snippets,
            });
        }

        let summary = self.summarizer.summarize(&results);

        tracing::debug!(
            query = query,
            hits = results.len(),
            "Query answered"
        );

        Ok(QueryResponse {
            query: query.to_string(),
            results,
            summary,
            meta: ResponseMeta {
                took_ms: timer.stop(),
                doc_count: self.corpus.len(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Six-document corpus mirroring the shape of the production one
    const FIXTURE_DOCS: &[(&str, &str)] = &[
        (
            "doc1",
            "Civil Liability Basics\nTort law addresses civil wrongs causing harm. \
             Negligence requires duty of care, breach of that duty, causation, and damages. \
             Breach occurs when the standard of care is not met.",
        ),
        (
            "doc2",
            "Contract Formation Guide\nA valid contract requires offer, acceptance, and consideration. \
             Breach of contract occurs when a party fails to perform. \
             Material breach deprives the innocent party of the contract benefit. \
             Remedies for breach of contract include damages.",
        ),
        (
            "doc3",
            "Criminal Procedure Overview\nCriminal procedure governs prosecution of offenses. \
             The presumption of innocence requires proof beyond reasonable doubt.",
        ),
        (
            "doc4",
            "Property Law Fundamentals\nProperty law governs ownership and transfer of property. \
             Easements grant limited rights to use another's property.",
        ),
        (
            "doc5",
            "Constitutional Law Principles\nSeparation of powers divides authority among branches. \
             Judicial review empowers courts to invalidate unconstitutional laws.",
        ),
        (
            "doc6",
            "Employment Law Essentials\nEmployment law regulates employers and employees. \
             Employment contracts may include non-compete clauses.",
        ),
    ];

    fn engine_with_docs(docs: &[(&str, &str)]) -> (TempDir, QueryEngine) {
        let dir = TempDir::new().unwrap();
        for (name, content) in docs {
            fs::write(dir.path().join(format!("{}.txt", name)), content).unwrap();
        }
        let mut config = Config::default();
        config.corpus.docs_dir = dir.path().to_path_buf();
        let engine = QueryEngine::initialize(Arc::new(config)).unwrap();
        (dir, engine)
    }

    #[test]
    fn test_contract_breach_ranks_densest_document_first() {
        let (_dir, engine) = engine_with_docs(FIXTURE_DOCS);
        let response = engine.handle_query("contract breach").unwrap();

        assert_eq!(response.meta.doc_count, 6);
        assert!(!response.results.is_empty());
        // doc2 contains both terms most densely
        assert_eq!(response.results[0].doc_id, "doc2");
        assert!(response.results[0].score > 0.0);
        assert!(!response.summary.is_empty());
        // Summary derives from the top result's text
        assert!(response.results[0]
            .snippets
            .iter()
            .any(|s| response.summary.starts_with(s.as_str())));
    }

    #[test]
    fn test_unknown_term_yields_empty_results_and_summary() {
        let (_dir, engine) = engine_with_docs(FIXTURE_DOCS);
        let response = engine.handle_query("zzz_no_such_term").unwrap();

        assert!(response.results.is_empty());
        assert_eq!(response.summary, "");
        assert_eq!(response.meta.doc_count, 6);
    }

    #[test]
    fn test_empty_query_is_rejected() {
        let (_dir, engine) = engine_with_docs(FIXTURE_DOCS);
        for raw in ["", "   ", "\t\n"] {
            let err = engine.handle_query(raw).unwrap_err();
            assert!(matches!(err, SearchError::InvalidSearchQuery { .. }));
        }
    }

    #[test]
    fn test_empty_corpus_serves_valid_queries() {
        let (_dir, engine) = engine_with_docs(&[]);
        let response = engine.handle_query("contract").unwrap();

        assert!(response.results.is_empty());
        assert_eq!(response.summary, "");
        assert_eq!(response.meta.doc_count, 0);
    }

    #[test]
    fn test_ranking_is_total_and_breaks_ties_by_doc_id() {
        // Two identical documents tie exactly; lower doc_id must come first
        let (_dir, engine) = engine_with_docs(&[
            ("b_copy", "breach of duty"),
            ("a_copy", "breach of duty"),
            ("c_other", "breach of duty and care and much more text here"),
        ]);
        let response = engine.handle_query("breach").unwrap();

        let ids: Vec<&str> = response.results.iter().map(|h| h.doc_id.as_str()).collect();
        assert_eq!(&ids[..2], &["a_copy", "b_copy"]);
        let scores: Vec<f64> = response.results.iter().map(|h| h.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_results_are_truncated_to_max_results() {
        let docs: Vec<(String, String)> = (0..15)
            .map(|i| (format!("doc{:02}", i), "breach of contract".to_string()))
            .collect();
        let borrowed: Vec<(&str, &str)> = docs
            .iter()
            .map(|(n, c)| (n.as_str(), c.as_str()))
            .collect();
        let (_dir, engine) = engine_with_docs(&borrowed);

        let response = engine.handle_query("breach").unwrap();
        assert_eq!(response.results.len(), 10);
        assert_eq!(response.meta.doc_count, 15);
    }

    #[test]
    fn test_snippets_are_capped_and_contain_query_terms() {
        let (_dir, engine) = engine_with_docs(FIXTURE_DOCS);
        let response = engine.handle_query("contract breach").unwrap();

        for hit in &response.results {
            assert!(hit.snippets.len() <= 3);
            for snippet in &hit.snippets {
                let lower = snippet.to_lowercase();
                assert!(
                    lower.contains("contract") || lower.contains("breach"),
                    "snippet without query term: {}",
                    snippet
                );
            }
        }
    }

    #[test]
    fn test_identical_queries_are_idempotent() {
        let (_dir, engine) = engine_with_docs(FIXTURE_DOCS);
        let first = engine.handle_query("breach of contract").unwrap();
        let second = engine.handle_query("breach of contract").unwrap();

        assert_eq!(
            serde_json::to_string(&first.results).unwrap(),
            serde_json::to_string(&second.results).unwrap()
        );
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_query_token_order_does_not_change_scores() {
        let (_dir, engine) = engine_with_docs(FIXTURE_DOCS);
        let forward = engine.handle_query("contract breach").unwrap();
        let reverse = engine.handle_query("breach contract").unwrap();

        let forward_pairs: Vec<(String, f64)> = forward
            .results
            .iter()
            .map(|h| (h.doc_id.clone(), h.score))
            .collect();
        let reverse_pairs: Vec<(String, f64)> = reverse
            .results
            .iter()
            .map(|h| (h.doc_id.clone(), h.score))
            .collect();
        assert_eq!(forward_pairs, reverse_pairs);
    }
}
