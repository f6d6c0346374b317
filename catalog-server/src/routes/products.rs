//! Product Catalog Routes
//!
//! One resource, method-routed. Reads are public; mutations require the
//! admin credential and go through the document store's optimistic
//! concurrency cycle. Removing a product is composed here as
//! read → filter → replace, never as a store primitive.

use axum::{Json, Router, body::Bytes, extract::State, http::HeaderMap, routing::get};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::warn;

use shared::{
    AppError, AppResult, CatalogResponse, MutationResponse, RemoveProductRequest,
    ReplaceCatalogRequest,
};

use crate::server::{ServerState, access::require_admin};

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/products",
        get(list)
            .post(replace)
            .put(replace)
            .delete(remove)
            .options(preflight)
            .fallback(method_not_allowed),
    )
}

/// OPTIONS /products - CORS preflight, carries no credential and no payload
async fn preflight() -> Json<Value> {
    Json(json!({}))
}

/// GET /products - full catalog, public
async fn list(State(state): State<ServerState>) -> AppResult<Json<CatalogResponse>> {
    let document = state.store().fetch_document().await?;

    Ok(Json(CatalogResponse {
        products: document.products,
        sha: document.sha,
    }))
}

/// POST/PUT /products - wholesale catalog replacement, admin only
///
/// The caller submits the token from its last read; a stale token is
/// rejected by the remote store and surfaces here as a 500 with the
/// remote's message, so the admin UI re-fetches and retries.
async fn replace(
    State(state): State<ServerState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<MutationResponse>> {
    require_admin(state.policy(), &headers)?;

    let request: ReplaceCatalogRequest = parse_body(&body)?;

    let sha = state
        .store()
        .replace_document(&request.products, request.sha.as_deref())
        .await?;

    Ok(Json(MutationResponse { success: true, sha }))
}

/// DELETE /products - remove one product by id, admin only
async fn remove(
    State(state): State<ServerState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<MutationResponse>> {
    require_admin(state.policy(), &headers)?;

    let request: RemoveProductRequest = parse_body(&body)?;

    let document = state.store().fetch_document().await.map_err(removal_failed)?;

    // Nothing persisted yet means nothing to remove from
    let Some(sha) = document.sha else {
        warn!("Product removal requested but no catalog blob exists");
        return Err(AppError::internal("Failed to remove product"));
    };

    let mut products = document.products;
    products.retain(|p| p.id() != Some(&request.product_id));

    // Write with the token from the read above, never the caller's: the
    // filtered catalog must replace exactly the bytes it was derived from.
    let sha = state
        .store()
        .replace_document(&products, Some(&sha))
        .await
        .map_err(removal_failed)?;

    Ok(Json(MutationResponse { success: true, sha }))
}

/// Any other method on /products
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Bodies are parsed in-handler so a malformed payload flows through the
/// unified error path, with the policy headers still applied.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> AppResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::internal(format!("Invalid request body: {e}")))
}

fn removal_failed(err: AppError) -> AppError {
    warn!(error = %err, "Product removal failed");
    AppError::internal("Failed to remove product")
}
