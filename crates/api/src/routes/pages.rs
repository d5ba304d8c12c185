//! Route definitions for the HTML pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes, mounted at the root.
///
/// ```text
/// GET    /                             -> landing
/// GET    /admin                        -> admin
/// GET    /customer                     -> customer
/// POST   /admin/products               -> admin_create
/// POST   /admin/products/{id}          -> admin_update
/// POST   /admin/products/{id}/delete   -> admin_delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::landing))
        .route("/admin", get(pages::admin))
        .route("/customer", get(pages::customer))
        .route("/admin/products", post(pages::admin_create))
        .route("/admin/products/{id}", post(pages::admin_update))
        .route("/admin/products/{id}/delete", post(pages::admin_delete))
}
