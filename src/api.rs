//! # API Server Module
//!
//! ## Purpose
//! Thin REST layer over the query engine. No retrieval logic lives here; the
//! handlers validate transport concerns, delegate to the engine, and map
//! errors to HTTP statuses.
//!
//! ## Input/Output Specification
//! - **Input**: HTTP requests with JSON query payloads
//! - **Output**: JSON responses in the stable wire shape
//! - **Endpoints**: `POST /search` (alias `POST /generate`), `GET /healthz`
//!
//! ## Error Mapping
//! - Invalid query -> 400 with a JSON error body
//! - Anything else -> 500; startup failures never reach this layer

use crate::errors::{Result, SearchError};
use crate::AppState;
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::Deserialize;

/// API server wrapping the shared application state
pub struct ApiServer {
    app_state: AppState,
}

/// Search request payload
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

impl ApiServer {
    pub fn new(app_state: AppState) -> Self {
        Self { app_state }
    }

    /// Run the API server until shutdown
    pub async fn run(self) -> Result<()> {
        let bind_addr = format!(
            "{}:{}",
            self.app_state.config.server.host, self.app_state.config.server.port
        );
        let enable_cors = self.app_state.config.server.enable_cors;
        let app_state = self.app_state;

        tracing::info!("Starting API server on {}", bind_addr);

        let server = HttpServer::new(move || {
            let cors = if enable_cors {
                Cors::permissive()
            } else {
                Cors::default()
            };

            App::new()
                .app_data(web::Data::new(app_state.clone()))
                .wrap(cors)
                .configure(configure)
        })
        .bind(&bind_addr)
        .map_err(|e| SearchError::Internal {
            message: format!("Failed to bind server to {}: {}", bind_addr, e),
        })?
        .run();

        server.await.map_err(|e| SearchError::Internal {
            message: format!("Server error: {}", e),
        })?;

        Ok(())
    }
}

/// Route configuration shared by the server and integration tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/search", web::post().to(search_handler))
        .route("/generate", web::post().to(search_handler))
        .route("/healthz", web::get().to(healthz_handler));
}

/// Search endpoint handler
async fn search_handler(
    app_state: web::Data<AppState>,
    request: web::Json<SearchRequest>,
) -> ActixResult<HttpResponse> {
    match app_state.engine.handle_query(&request.query) {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e @ SearchError::InvalidSearchQuery { .. }) => {
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string(),
            })))
        }
        Err(e) => {
            tracing::error!(category = e.category(), "Search error: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Search failed",
            })))
        }
    }
}

/// Readiness probe: reports whether initialization completed and how many
/// documents are loaded
async fn healthz_handler(app_state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "ok": true,
        "docs": app_state.engine.doc_count(),
    })))
}
