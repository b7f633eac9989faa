//! # Legal Corpus Search Engine
//!
//! ## Overview
//! This library implements a small, deterministic search engine over a fixed
//! corpus of legal documents. Queries are answered with ranked matches,
//! relevance scores, sentence snippets around the matched terms, and a short
//! extractive summary built from the top-ranked document.
//!
//! ## Architecture
//! The system is composed of several key modules:
//! - `corpus`: Document loading and the immutable in-memory corpus
//! - `text_processing`: Tokenization, normalization, and sentence splitting
//! - `index`: Per-document term statistics and the inverted term mapping
//! - `scoring`: Term-frequency relevance scoring
//! - `snippet`: Context windows around query-term occurrences
//! - `summary`: Extractive summary generation
//! - `search`: Query engine orchestrating the retrieval pipeline
//! - `api`: REST API endpoints
//! - `config`: Configuration management and settings
//! - `errors`: Centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: Plain-text legal documents (one `.txt` file each), free-text queries
//! - **Output**: Ranked results with scores, snippets, and an extractive summary
//! - **Guarantees**: The corpus and index are built once at startup and are
//!   read-only afterwards, so concurrent queries need no locking and identical
//!   queries always produce identical results.
//!
//! ## Usage
//! ```rust,no_run
//! use legal_corpus_search::{Config, QueryEngine};
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(Config::from_file("config.toml")?);
//!     let engine = QueryEngine::initialize(config)?;
//!     let response = engine.handle_query("contract breach")?;
//!     println!("Found {} results", response.results.len());
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod errors;
pub mod corpus;
pub mod text_processing;
pub mod index;
pub mod scoring;
pub mod snippet;
pub mod summary;
pub mod search;
pub mod api;

// Utilities
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use corpus::{Corpus, Document};
pub use errors::{Result, SearchError};
pub use index::Index;
pub use search::{QueryEngine, QueryResponse, SearchHit};

use std::sync::Arc;

/// Stable document identifier, derived from the source filename stem.
/// Identical corpora produce identical ids across restarts.
pub type DocId = String;

/// Application state shared across HTTP workers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Config>,
    pub engine: Arc<search::QueryEngine>,
}
