//! Product store trait and its MongoDB implementation.

mod product_repo;

pub use product_repo::{MongoProductRepo, ProductRepo};
