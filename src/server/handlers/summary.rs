// src/server/handlers/summary.rs
//! Recipe summary handler

use crate::server::ServerState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Recipe to summarize; a missing name is treated as not found
    #[serde(default)]
    pub name: String,
}

/// Expand a recipe into base ingredients and total cook time
///
/// GET /summary?name=...
pub async fn get_summary(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    match state.registry.summary(&query.name) {
        Ok(summary) => {
            state.metrics.record_summary_served();
            debug!(
                "Summary for '{}': {} ingredients, cook time {}",
                summary.name,
                summary.ingredients.len(),
                summary.cook_time
            );
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(e) => {
            state.metrics.record_summary_failed();
            warn!("Summary for '{}' failed ({}): {}", query.name, e.code(), e);
            e.into_response()
        }
    }
}
