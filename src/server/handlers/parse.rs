// src/server/handlers/parse.rs
//! Recipe name normalization handler

use crate::name::normalize_name;
use crate::server::ServerState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Response for a successfully normalized name
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}

/// Normalize a handwritten recipe name
///
/// POST /parse
///
/// The body is `{"input": "..."}`. A body that is not JSON, or an `input`
/// that is missing or not a string, is treated as an empty name.
pub async fn parse_name(State(state): State<Arc<ServerState>>, body: Bytes) -> Response {
    let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let input = request.get("input").and_then(Value::as_str).unwrap_or("");

    match normalize_name(input) {
        Ok(msg) => {
            state.metrics.record_name_parsed();
            (StatusCode::OK, Json(ParseResponse { msg })).into_response()
        }
        Err(e) => {
            state.metrics.record_name_rejected();
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
