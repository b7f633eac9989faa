//! # Legal Corpus Search Main Driver
//!
//! ## Purpose
//! Main entry point for the search server. Loads configuration, builds the
//! corpus and index once, and starts the web server for handling queries.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration file, command line arguments, environment variables
//! - **Output**: Running web server with search API endpoints
//!
//! ## Architecture Flow
//! 1. Parse command line arguments and load configuration
//! 2. Initialize logging and tracing
//! 3. Load the corpus and build the index (fatal on failure)
//! 4. Start the web API server
//! 5. Handle shutdown signals gracefully

use clap::{Arg, Command};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use legal_corpus_search::{
    api::ApiServer,
    config::Config,
    errors::{Result, SearchError},
    search::QueryEngine,
    AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("legal-search-server")
        .version("0.1.0")
        .author("Legal Search Team")
        .about("Term-based legal document search with snippets and extractive summaries")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Server port")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("docs-dir")
                .short('d')
                .long("docs-dir")
                .value_name("DIR")
                .help("Directory containing the corpus documents"),
        )
        .get_matches();

    // Load configuration
    let config_path = matches.get_one::<String>("config").expect("has default");
    let mut config = Config::from_file(config_path)?;

    // CLI overrides take precedence over file and environment
    if let Some(port) = matches.get_one::<u16>("port") {
        config.server.port = *port;
    }
    if let Some(docs_dir) = matches.get_one::<String>("docs-dir") {
        config.corpus.docs_dir = docs_dir.into();
    }

    let config = Arc::new(config);

    init_logging(&config)?;

    info!("Starting Legal Corpus Search v0.1.0");
    info!("Configuration loaded from: {}", config_path);

    // Load corpus and build index; a failure here aborts before serving
    let engine = match QueryEngine::initialize(config.clone()) {
        Ok(engine) => Arc::new(engine),
        Err(e) => {
            error!(category = e.category(), "Startup failed: {}", e);
            return Err(e);
        }
    };

    if engine.doc_count() == 0 {
        warn!("Corpus is empty; all queries will return no results");
    }
    info!("Engine ready with {} document(s) loaded", engine.doc_count());

    let app_state = AppState {
        config: config.clone(),
        engine,
    };

    let server = ApiServer::new(app_state);
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.run().await {
            error!("Server error: {}", e);
        }
    });

    info!(
        "Legal Corpus Search listening on {}:{}",
        config.server.host, config.server.port
    );

    // Wait for shutdown signal
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = server_handle => {
            warn!("Server stopped unexpectedly");
        }
    }

    info!("Legal Corpus Search shut down");
    Ok(())
}

/// Initialize logging and tracing
fn init_logging(config: &Config) -> Result<()> {
    let log_level: tracing::Level =
        config.logging.level.parse().map_err(|_| SearchError::Config {
            message: format!("Invalid log level: {}", config.logging.level),
        })?;
    let filter = tracing_subscriber::filter::LevelFilter::from_level(log_level);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true);

    if config.logging.json_format {
        tracing_subscriber::registry()
            .with(fmt_layer.json().with_filter(filter))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt_layer.with_filter(filter))
            .init();
    }

    info!("Logging initialized with level: {}", config.logging.level);
    Ok(())
}
