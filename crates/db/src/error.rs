use catalog_core::error::CoreError;

/// Failure raised by a product store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Invalid object id: {0}")]
    ObjectId(#[from] mongodb::bson::oid::Error),

    /// A stored document could not be mapped onto a product.
    #[error("Corrupt document: {0}")]
    Corrupt(#[from] CoreError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
