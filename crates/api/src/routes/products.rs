//! Route definitions for the product Collection API.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Product routes, mounted under `/api`.
///
/// ```text
/// GET    /products          -> list_products
/// POST   /products          -> create_product
/// GET    /products/{id}     -> get_product
/// PATCH  /products/{id}     -> update_product
/// DELETE /products/{id}     -> delete_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .patch(products::update_product)
                .delete(products::delete_product),
        )
}
