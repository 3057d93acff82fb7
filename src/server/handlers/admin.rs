// src/server/handlers/admin.rs
//! Operator endpoints

use crate::server::{MetricsSnapshot, ServerState};
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Number of registered entries
    pub entries: usize,
    pub metrics: MetricsSnapshot,
}

/// Registry size and request counters
///
/// GET /v1/admin/stats
pub async fn stats(State(state): State<Arc<ServerState>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        entries: state.registry.len(),
        metrics: state.metrics.snapshot(),
    })
}
