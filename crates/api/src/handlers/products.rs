//! Handlers for the product Collection API.
//!
//! Five stateless operations over `/api/products`. Path ids are checked
//! against the object id format before the store is touched.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::product::{CreateProduct, ProductPatch};
use catalog_core::types::ProductId;

use crate::error::{AppError, AppResult};
use crate::response::{MessageResponse, ProductResponse};
use crate::state::AppState;

/// Message confirming a successful delete.
pub const DELETED_MESSAGE: &str = "Product deleted successfully";

/// GET /api/products
///
/// Every product, hidden ones included, in insertion order.
pub async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = state.products.list_all().await?;

    Ok(Json(products))
}

/// POST /api/products
///
/// Create a product. `name` and `price` are required; `visibility`
/// defaults to `true`.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProduct>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(body_rejected)?;
    let new_product = input.into_new_product()?;

    let product = state.products.create(new_product).await?;

    tracing::info!(product_id = %product.id, name = %product.name, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = ProductId::parse(&raw_id)?;

    let product = state
        .products
        .find_by_id(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(ProductResponse::new(product)))
}

/// PATCH /api/products/{id}
///
/// Merge the provided fields into the record. Omitted fields are untouched.
pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<ProductPatch>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = ProductId::parse(&raw_id)?;
    let Json(patch) = payload.map_err(body_rejected)?;

    let product = state
        .products
        .update(&id, &patch)
        .await?
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(product_id = %id, "Product updated");

    Ok(Json(ProductResponse::new(product)))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = ProductId::parse(&raw_id)?;

    if !state.products.delete(&id).await? {
        return Err(not_found(&id));
    }

    tracing::info!(product_id = %id, "Product deleted");

    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: &ProductId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Product",
        id: id.to_string(),
    })
}

fn body_rejected(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection, "Rejected request body");
    AppError::BadRequest("Invalid request body".into())
}
