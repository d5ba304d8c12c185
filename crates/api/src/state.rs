use std::sync::Arc;

use catalog_db::ProductRepo;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Product store. Owns the memoized database connection when backed by MongoDB.
    pub products: Arc<dyn ProductRepo>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
