//! # Configuration Management Module
//!
//! ## Purpose
//! Centralized configuration management for the search engine, supporting TOML
//! files and environment variable overrides with validation and type-safe
//! access to all system settings.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration files (TOML), environment variables, CLI arguments
//! - **Output**: Validated configuration structs with defaults and overrides
//! - **Validation**: Type checking, range validation
//!
//! ## Configuration Sources (in order of precedence)
//! 1. Command line arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration files
//! 4. Default values (lowest priority)
//!
//! ## Usage
//! ```rust,no_run
//! use legal_corpus_search::config::Config;
//!
//! let config = Config::from_file("config.toml").unwrap();
//! println!("Server port: {}", config.server.port);
//! ```

use crate::errors::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure containing all system settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Server and API configuration
    pub server: ServerConfig,
    /// Corpus loading settings
    pub corpus: CorpusConfig,
    /// Query engine behavior
    pub search: SearchEngineConfig,
    /// Snippet extraction settings
    pub snippet: SnippetConfig,
    /// Summary generation settings
    pub summary: SummaryConfig,
    /// Logging and monitoring
    pub logging: LoggingConfig,
}

/// Server and API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Enable permissive CORS for web frontends
    pub enable_cors: bool,
}

/// Corpus loading configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Directory containing the `.txt` corpus documents
    pub docs_dir: PathBuf,
    /// Maximum length for a first-line title; longer first lines fall back to
    /// a title derived from the filename
    pub max_title_len: usize,
}

/// Query engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchEngineConfig {
    /// Maximum number of ranked results per query
    pub max_results: usize,
    /// Decimal places kept when rounding scores for the wire
    pub round_decimals: u32,
}

/// Snippet extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetConfig {
    /// Maximum snippets returned per result
    pub max_snippets: usize,
    /// Maximum characters per snippet before word-boundary truncation
    pub max_snippet_chars: usize,
}

/// Summary generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Maximum characters in the extractive summary
    pub max_summary_chars: usize,
}

/// Logging and monitoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable structured JSON logging
    pub json_format: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            enable_cors: true,
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("./docs"),
            max_title_len: 120,
        }
    }
}

impl Default for SearchEngineConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            round_decimals: 4,
        }
    }
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            max_snippets: 3,
            max_snippet_chars: 240,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_summary_chars: 600,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::from_file("config.toml")
    }

    /// Load configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| SearchError::Config {
                message: format!("Failed to read config file {:?}: {}", path, e),
            })?;

            toml::from_str(&content).map_err(|e| SearchError::Config {
                message: format!("Failed to parse config file {:?}: {}", path, e),
            })?
        } else {
            tracing::warn!("Configuration file not found: {:?}, using defaults", path);
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("LEGAL_SEARCH_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("LEGAL_SEARCH_PORT") {
            self.server.port = port.parse().map_err(|_| SearchError::Config {
                message: "Invalid port number in LEGAL_SEARCH_PORT".to_string(),
            })?;
        }
        if let Ok(docs_dir) = std::env::var("LEGAL_SEARCH_DOCS_DIR") {
            self.corpus.docs_dir = PathBuf::from(docs_dir);
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(SearchError::ValidationFailed {
                field: "server.port".to_string(),
                reason: "Port cannot be zero".to_string(),
            });
        }

        if self.search.max_results == 0 {
            return Err(SearchError::ValidationFailed {
                field: "search.max_results".to_string(),
                reason: "At least one result must be allowed".to_string(),
            });
        }

        if self.snippet.max_snippets == 0 {
            return Err(SearchError::ValidationFailed {
                field: "snippet.max_snippets".to_string(),
                reason: "At least one snippet must be allowed".to_string(),
            });
        }

        if self.snippet.max_snippet_chars == 0 || self.summary.max_summary_chars == 0 {
            return Err(SearchError::ValidationFailed {
                field: "snippet.max_snippet_chars".to_string(),
                reason: "Character limits must be greater than zero".to_string(),
            });
        }

        if self.corpus.max_title_len == 0 {
            return Err(SearchError::ValidationFailed {
                field: "corpus.max_title_len".to_string(),
                reason: "Title length limit must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Get configuration as TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SearchError::Config {
            message: format!("Failed to serialize config to TOML: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.max_results, 10);
        assert_eq!(config.snippet.max_snippets, 3);
    }

    #[test]
    fn test_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.snippet.max_snippet_chars, 240);
    }

    #[test]
    fn test_roundtrips_through_toml() {
        let config = Config::default();
        let serialized = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.summary.max_summary_chars, config.summary.max_summary_chars);
    }
}
