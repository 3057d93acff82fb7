// src/server/handlers/mod.rs
//! HTTP request handlers for the cookbook server

pub mod admin;
pub mod entries;
pub mod parse;
pub mod summary;

use crate::cookbook::{SummaryError, ValidationError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

impl IntoResponse for SummaryError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
