//! Route definitions for the HTTP API.

pub mod enhance;
pub mod health;
pub mod zoom;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(zoom::routes())
        .merge(enhance::routes())
        .with_state(state)
}
