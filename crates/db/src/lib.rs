//! Document-store access for the product catalog.
//!
//! The [`ProductRepo`] trait is the seam between HTTP handlers and storage.
//! [`MongoProductRepo`] talks to MongoDB through a lazily established,
//! memoized [`Connector`]; [`InMemoryProductRepo`] keeps records in process
//! memory for tests and local runs.

pub mod connector;
pub mod error;
pub mod memory;
pub mod models;
pub mod repositories;

pub use connector::{Connector, Dial, MongoConnector, MongoDialer};
pub use error::StoreError;
pub use memory::InMemoryProductRepo;
pub use repositories::{MongoProductRepo, ProductRepo};

/// Name of the collection holding product documents.
pub const PRODUCTS_COLLECTION: &str = "products";
