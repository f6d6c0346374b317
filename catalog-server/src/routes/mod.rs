//! HTTP routes and application assembly

use axum::{Router, http::Uri, middleware as axum_middleware};
use http::{HeaderName, HeaderValue};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use shared::AppError;

use crate::server::{ServerState, access, middleware};

pub mod health;
pub mod products;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Catalog API - reads public, mutations admin-gated
        .merge(products::router())
        // Health API - public route
        .merge(health::router())
        // Unknown routes still answer JSON, with policy headers applied
        .fallback(not_found)
}

/// Build a fully configured application with all middleware
///
/// This is used by both the HTTP server and the in-process tests
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // Access policy headers - outermost, so every exit path carries them
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            access::apply_access_headers,
        ))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
