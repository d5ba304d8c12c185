//! Response envelopes for the single-record endpoints.
//!
//! The list and create endpoints return bare products; get, update and
//! delete wrap their payload with a `success` flag.

use catalog_core::product::Product;
use serde::Serialize;

/// `{ "success": true, "product": ... }`
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

impl ProductResponse {
    pub fn new(product: Product) -> Self {
        Self {
            success: true,
            product,
        }
    }
}

/// `{ "success": true, "message": ... }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
