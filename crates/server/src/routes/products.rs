//! Product CRUD and listing handlers.
//!
//! Writes validate first and only touch the store when the error list is
//! empty; the store itself has no failure path beyond absence. Success
//! bodies are the records themselves; only errors get an envelope.

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use catalog::{validate_draft, validate_patch, ListParams, ProductDraft, ProductPatch};
use std::sync::Arc;

/// List products with pagination, filtering, sorting, and search
pub async fn list_products(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<ListParams>,
) -> ServerResult<impl IntoResponse> {
    tracing::info!(
        page_number = params.page_number,
        page_size = params.page_size,
        "Listing products"
    );

    let page = state.catalog.list(&params);
    Ok(Json(page))
}

/// Get a product by ID
pub async fn get_product(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> ServerResult<impl IntoResponse> {
    tracing::info!(product_id = id, "Getting product");

    match state.catalog.get(id) {
        Some(product) => Ok(Json(product)),
        None => Err(ServerError::ProductNotFound(id)),
    }
}

/// Create a new product
///
/// Responds 201 with a Location header pointing at the new record.
pub async fn create_product(
    State(state): State<Arc<ServerState>>,
    Json(draft): Json<ProductDraft>,
) -> ServerResult<impl IntoResponse> {
    tracing::info!(name = %draft.name, "Creating product");

    let errors = validate_draft(&draft);
    if !errors.is_empty() {
        return Err(ServerError::Validation(errors));
    }

    let product = state.catalog.create(&draft);
    let location = format!("/api/v1/products/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Fully update a product
pub async fn update_product(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
    Json(draft): Json<ProductDraft>,
) -> ServerResult<impl IntoResponse> {
    tracing::info!(product_id = id, "Updating product");

    let errors = validate_draft(&draft);
    if !errors.is_empty() {
        return Err(ServerError::Validation(errors));
    }

    match state.catalog.update(id, &draft) {
        Some(product) => Ok(Json(product)),
        None => Err(ServerError::ProductNotFound(id)),
    }
}

/// Partially update a product
///
/// Fields absent from the body are left unchanged; `updated_at` is stamped
/// even when the patch is empty.
pub async fn patch_product(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
    Json(patch): Json<ProductPatch>,
) -> ServerResult<impl IntoResponse> {
    tracing::info!(product_id = id, "Patching product");

    let errors = validate_patch(&patch);
    if !errors.is_empty() {
        return Err(ServerError::Validation(errors));
    }

    match state.catalog.patch(id, &patch) {
        Some(product) => Ok(Json(product)),
        None => Err(ServerError::ProductNotFound(id)),
    }
}

/// Delete a product
pub async fn delete_product(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> ServerResult<impl IntoResponse> {
    tracing::info!(product_id = id, "Deleting product");

    if state.catalog.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::ProductNotFound(id))
    }
}

/// Existence probe (HEAD request): 200 or 404, no body
pub async fn head_product(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> StatusCode {
    if state.catalog.exists(id) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Allowed HTTP methods for the products endpoint
pub async fn options_products() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(
            header::ALLOW,
            "GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS",
        )],
    )
}
