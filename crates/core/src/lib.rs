//! Domain types and pure view models for the product catalog.
//!
//! Nothing in this crate performs I/O. The storage layer (`catalog-db`) and
//! the HTTP layer (`catalog-api`) both build on these types, and the admin
//! and storefront views are expressed as projections over a product
//! snapshot so they can be exercised without a server.

pub mod admin;
pub mod error;
pub mod form;
pub mod image_urls;
pub mod notice;
pub mod product;
pub mod storefront;
pub mod types;
