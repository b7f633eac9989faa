//! # Index Module
//!
//! ## Purpose
//! Precomputed per-document term statistics built once from the corpus at
//! startup, plus an inverted mapping from term to the documents containing it.
//!
//! ## Input/Output Specification
//! - **Input**: The loaded `Corpus` and the shared `Tokenizer`
//! - **Output**: Read-only `Index` shared across concurrent queries
//! - **Complexity**: Building is O(total corpus size)
//!
//! ## Invariants
//! - Every corpus document appears in the index exactly once
//! - The inverted mapping is exhaustive: every term in any document's
//!   frequencies maps back to that document's id
//! - The inverted mapping prunes scoring to candidate documents only; scoring
//!   never scans the whole corpus

use crate::corpus::Corpus;
use crate::text_processing::Tokenizer;
use crate::DocId;
use std::collections::{BTreeSet, HashMap};

/// Per-document term statistics
#[derive(Debug, Clone)]
pub struct DocStats {
    /// Normalized term -> occurrence count within this document
    pub term_frequencies: HashMap<String, u32>,
    /// Total token count of the document
    pub length: usize,
}

/// Read-only term index over the corpus
pub struct Index {
    stats: HashMap<DocId, DocStats>,
    /// Term -> sorted ids of documents containing that term
    inverted: HashMap<String, Vec<DocId>>,
    doc_count: usize,
}

impl Index {
    /// Build the index from the corpus, tokenizing every document once
    pub fn build(corpus: &Corpus, tokenizer: &Tokenizer) -> Self {
        let mut stats = HashMap::new();
        let mut inverted: HashMap<String, Vec<DocId>> = HashMap::new();

        for doc in corpus.iter() {
            let tokens = tokenizer.tokenize(&doc.raw_text);
            let length = tokens.len();

            let mut term_frequencies: HashMap<String, u32> = HashMap::new();
            for token in tokens {
                *term_frequencies.entry(token).or_insert(0) += 1;
            }

            for term in term_frequencies.keys() {
                inverted
                    .entry(term.clone())
                    .or_default()
                    .push(doc.doc_id.clone());
            }

            stats.insert(
                doc.doc_id.clone(),
                DocStats {
                    term_frequencies,
                    length,
                },
            );
        }

        // Corpus iteration is already sorted by doc_id, so postings are too;
        // sort anyway to keep the ordering an explicit invariant
        for postings in inverted.values_mut() {
            postings.sort();
            postings.dedup();
        }

        tracing::info!(
            "Built index: {} document(s), {} distinct term(s)",
            stats.len(),
            inverted.len()
        );

        Self {
            doc_count: stats.len(),
            stats,
            inverted,
        }
    }

    /// Per-document statistics for scoring
    pub fn doc_stats(&self, doc_id: &str) -> Option<&DocStats> {
        self.stats.get(doc_id)
    }

    /// Sorted union of document ids containing any of the given terms.
    /// Documents outside this set implicitly score zero.
    pub fn candidates(&self, query_terms: &[String]) -> Vec<DocId> {
        let mut ids = BTreeSet::new();
        for term in query_terms {
            if let Some(postings) = self.inverted.get(term) {
                for doc_id in postings {
                    ids.insert(doc_id.clone());
                }
            }
        }
        ids.into_iter().collect()
    }

    /// Number of indexed documents
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Number of distinct terms across the corpus
    pub fn term_count(&self) -> usize {
        self.inverted.len()
    }
}
