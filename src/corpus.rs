//! # Corpus Module
//!
//! ## Purpose
//! Loads the legal document corpus from disk once at startup and holds it as
//! an immutable, ordered collection of documents for the process lifetime.
//!
//! ## Input/Output Specification
//! - **Input**: A directory of plain-text `.txt` documents
//! - **Output**: Immutable `Corpus` with stable, deterministic document ids
//! - **Failure model**: A missing or unreadable directory is fatal; a single
//!   unreadable or empty file is skipped with a warning
//!
//! ## Key Features
//! - Deterministic load order (sorted filenames) and stable `doc_id`s
//! - Title derivation from the first content line or the filename
//! - Partial-failure tolerance so a corrupt file never takes down the service

use crate::config::CorpusConfig;
use crate::errors::{Result, SearchError};
use crate::DocId;
use std::collections::HashMap;

/// A single immutable corpus document
#[derive(Debug, Clone)]
pub struct Document {
    /// Stable identifier derived from the source filename stem
    pub doc_id: DocId,
    /// Human-readable title
    pub title: String,
    /// Full original content, never mutated after load
    pub raw_text: String,
}

/// The full set of loaded documents for a process lifetime
#[derive(Debug)]
pub struct Corpus {
    docs: Vec<Document>,
    by_id: HashMap<DocId, usize>,
}

impl Corpus {
    /// Load all corpus documents from the configured directory.
    ///
    /// Fails with `CorpusUnreadable` if the directory itself cannot be read;
    /// individual unreadable or empty entries are skipped with a warning.
    pub fn load(config: &CorpusConfig) -> Result<Self> {
        let dir = &config.docs_dir;

        let entries = std::fs::read_dir(dir).map_err(|e| SearchError::CorpusUnreadable {
            path: dir.to_string_lossy().to_string(),
            details: e.to_string(),
        })?;

        let mut paths: Vec<std::path::PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().map(|ext| ext == "txt").unwrap_or(false))
            .collect();
        // Sorted filenames keep doc order and ids identical across restarts
        paths.sort();

        let mut docs = Vec::new();
        let mut by_id = HashMap::new();

        for path in paths {
            let doc_id = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => {
                    tracing::warn!("Skipping corpus entry with unusable name: {:?}", path);
                    continue;
                }
            };

            let raw_text = match std::fs::read_to_string(&path) {
                Ok(text) => text.trim().to_string(),
                Err(e) => {
                    tracing::warn!("Skipping unreadable corpus entry {:?}: {}", path, e);
                    continue;
                }
            };

            if raw_text.is_empty() {
                tracing::warn!("Skipping empty corpus entry: {:?}", path);
                continue;
            }

            if by_id.contains_key(&doc_id) {
                tracing::warn!("Skipping duplicate doc_id '{}' from {:?}", doc_id, path);
                continue;
            }

            let title = derive_title(&doc_id, &raw_text, config.max_title_len);

            by_id.insert(doc_id.clone(), docs.len());
            docs.push(Document {
                doc_id,
                title,
                raw_text,
            });
        }

        tracing::info!("Loaded {} document(s) from {:?}", docs.len(), dir);

        Ok(Self { docs, by_id })
    }

    /// Number of loaded documents
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Look up a document by its id
    pub fn get(&self, doc_id: &str) -> Option<&Document> {
        self.by_id.get(doc_id).map(|&pos| &self.docs[pos])
    }

    /// Iterate documents in load order
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.iter()
    }
}

/// Derive a title from the first non-empty content line when it is short
/// enough to be a heading, otherwise humanize the filename stem.
fn derive_title(doc_id: &str, raw_text: &str, max_title_len: usize) -> String {
    if let Some(first_line) = raw_text.lines().map(str::trim).find(|l| !l.is_empty()) {
        if first_line.chars().count() <= max_title_len {
            return first_line.to_string();
        }
    }

    humanize_stem(doc_id)
}

/// Turn a filename stem like `contract_formation-guide` into `Contract Formation Guide`
fn humanize_stem(stem: &str) -> String {
    stem.replace(['_', '-'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
