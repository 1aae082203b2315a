//! API routes for the RAG server

pub mod ingest;
pub mod query;

use axum::{
    routing::{get, post},
    Json, Router,
};

use crate::server::state::AppState;
use crate::types::response::HealthResponse;

/// Build all routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/query", post(query::query))
        .route("/add", post(ingest::add_knowledge))
        .route("/health", get(health_check))
}

/// GET /health - liveness only; deliberately checks neither the store nor
/// the generation engine.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
