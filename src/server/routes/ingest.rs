//! Dynamic ingestion endpoint

use axum::{
    extract::{Query, State},
    Json,
};

use crate::ingestion;
use crate::server::state::AppState;
use crate::types::{query::AddParams, response::AddResponse};

/// POST /add - add new content to the knowledge base
///
/// Never raises: any failure during insertion is recovered here and
/// reported as a structured `{"status": "error"}` payload so ingestion can
/// never crash the serving process.
pub async fn add_knowledge(
    State(state): State<AppState>,
    Query(params): Query<AddParams>,
) -> Json<AddResponse> {
    match ingestion::add_text(state.collection(), &params.text).await {
        Ok(id) => Json(AddResponse::success(id)),
        Err(e) => {
            tracing::error!("Ingestion failed ({}): {}", e.kind(), e);
            Json(AddResponse::error(e.to_string()))
        }
    }
}
