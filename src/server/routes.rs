// src/server/routes.rs
//! Axum router configuration for the cookbook server

use crate::server::handlers::{admin, entries, parse, summary};
use crate::server::ServerState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_router(state: Arc<ServerState>) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);
    let body_limit = RequestBodyLimitLayer::new(state.config.max_body_bytes);
    let audit = state.config.enable_audit_log;

    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Name normalization
        .route("/parse", post(parse::parse_name))
        // Entry registration and lookup
        .route("/entry", post(entries::create_entry))
        .route("/entry/:name", get(entries::get_entry))
        // Recipe summaries
        .route("/summary", get(summary::get_summary))
        // Admin endpoints
        .route("/v1/admin/stats", get(admin::stats))
        .layer(body_limit)
        .layer(cors)
        .with_state(state);

    if audit {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ServerConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let state = Arc::new(ServerState::new(ServerConfig::default()));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let config = ServerConfig {
            max_body_bytes: 16,
            ..ServerConfig::default()
        };
        let state = Arc::new(ServerState::new(config));
        let app = create_router(state.clone());

        let body = r#"{"type": "ingredient", "name": "Egg", "cookTime": 2}"#;
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/entry")
                    .header("content-type", "application/json")
                    .header("content-length", body.len())
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(state.registry.is_empty());
    }

    #[test]
    fn test_cors_layer_skips_invalid_origins() {
        // Must not panic on a header value containing a newline
        let _ = cors_layer(&["https://example.com".to_string(), "bad\norigin".to_string()]);
    }
}
