//! # Scoring Module
//!
//! ## Purpose
//! Term-frequency relevance scoring for a document against a tokenized query.
//!
//! ## Input/Output Specification
//! - **Input**: Per-document statistics from the index, query tokens
//! - **Output**: Non-negative relevance score
//! - **Properties**: Deterministic, symmetric under query token order, and
//!   monotonically non-decreasing in any matched term's frequency at fixed
//!   document length
//!
//! Scores are corpus-relative, not probabilities; they are never normalized
//! across documents. A document sharing no terms with the query scores exactly
//! zero, and such documents are pruned before scoring via the inverted mapping.

use crate::index::DocStats;
use std::collections::BTreeSet;

/// Score a document for the given query tokens.
///
/// For each distinct query term present in the document, accumulates
/// `term_frequency / document_length` and sums across terms. Duplicate query
/// tokens contribute once, so the score is symmetric under token order.
pub fn score_document(stats: &DocStats, query_tokens: &[String]) -> f64 {
    if stats.length == 0 {
        return 0.0;
    }

    let distinct: BTreeSet<&String> = query_tokens.iter().collect();
    let length = stats.length as f64;

    distinct
        .iter()
        .filter_map(|term| stats.term_frequencies.get(term.as_str()))
        .map(|&tf| f64::from(tf) / length)
        .sum()
}

/// Round a score to `decimals` places for a stable wire representation
pub fn round_score(score: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (score * factor).round() / factor
}
