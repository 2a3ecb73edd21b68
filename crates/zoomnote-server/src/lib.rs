//! zoomnote-server: HTTP API for zoomnote text analysis
//!
//! This crate provides:
//! - Zoom-level resolution with a content-keyed summary cache
//! - Whole-note analysis (keywords, hashtags, beats, every view)
//! - Title, summary, tag and keyword enhancement with local fallback
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,no_run
//! use zoomnote_server::{ServerConfig, AppState, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::from_env()?;
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     let router = app(AppState::new(config.clone()), &config.cors_allowed_origins)?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::request_id::{propagate_request_id, request_id_layer, request_span};

// Re-exports for convenience
pub use cache::SummaryCache;
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// Build the router with the full middleware stack.
pub fn app(state: AppState, cors_allowed_origins: &str) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(cors_allowed_origins)?;

    Ok(routes::build_router(state)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(axum::middleware::from_fn(propagate_request_id))
        .layer(request_id_layer())
        .layer(cors))
}

/// Build CORS layer from configuration.
pub fn build_cors_layer(allowed_origins: &str) -> Result<CorsLayer, ConfigError> {
    if allowed_origins.trim() == "*" {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    // Parse comma-separated origins
    let origins = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<http::HeaderValue>()
                .map_err(|_| ConfigError::InvalidOrigin(s.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
