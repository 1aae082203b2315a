//! Query endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use std::time::Instant;

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{query::QueryParams, response::QueryResponse};

/// POST /query - answer a question grounded in the nearest stored document
///
/// Retrieval degradation (empty collection, no matches) is not an error;
/// generation failures propagate as typed errors and are mapped to
/// structured 5xx responses.
pub async fn query(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<QueryResponse>> {
    let start = Instant::now();

    let answer = state.pipeline().ask(&params.q).await?;

    tracing::info!(
        "Query answered in {}ms",
        start.elapsed().as_millis()
    );

    Ok(Json(QueryResponse::new(answer)))
}
