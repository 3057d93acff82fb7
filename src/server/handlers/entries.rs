// src/server/handlers/entries.rs
//! Entry creation and lookup handlers

use crate::cookbook::ValidationError;
use crate::server::ServerState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Register an ingredient or recipe
///
/// POST /entry
///
/// The body is parsed here rather than by the `Json` extractor so that every
/// bad body, including non-JSON, gets the same 400 validation response.
pub async fn create_entry(State(state): State<Arc<ServerState>>, body: Bytes) -> Response {
    let request: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            state.metrics.record_entry_rejected();
            debug!("Rejected entry body: {}", e);
            return ValidationError::MalformedRequest(format!("invalid JSON: {}", e))
                .into_response();
        }
    };

    match state.registry.create(&request) {
        Ok(entry) => {
            state.metrics.record_entry_created();
            info!("Created {} '{}'", entry.kind(), entry.name());
            StatusCode::OK.into_response()
        }
        Err(e) => {
            state.metrics.record_entry_rejected();
            debug!("Rejected entry ({}): {}", e.code(), e);
            e.into_response()
        }
    }
}

/// Fetch a registered entry
///
/// GET /entry/:name
pub async fn get_entry(
    State(state): State<Arc<ServerState>>,
    Path(name): Path<String>,
) -> Response {
    match state.registry.lookup(&name) {
        Some(entry) => (StatusCode::OK, Json(entry)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("No entry named '{}'", name),
        )
            .into_response(),
    }
}
