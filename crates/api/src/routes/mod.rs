pub mod health;
pub mod pages;
pub mod products;

use axum::http::Uri;
use axum::Router;
use catalog_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /products        -> list, create
/// /products/{id}   -> get, update, delete
/// ```
///
/// Unknown paths under `/api` get the JSON error body instead of axum's
/// empty 404.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(products::router())
        .fallback(unknown_api_route)
}

async fn unknown_api_route(uri: Uri) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Route",
        id: uri.path().to_string(),
    })
}
