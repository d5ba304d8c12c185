//! Customer-facing catalog view.

use crate::product::Product;

/// Keep only products customers are allowed to see.
pub fn visible_products(products: Vec<Product>) -> Vec<Product> {
    products.into_iter().filter(|p| p.visibility).collect()
}

/// Case-insensitive substring match on the product name. An empty query
/// matches everything.
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Storefront state: the visible snapshot and the live search text.
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    products: Vec<Product>,
    query: String,
}

impl Storefront {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot. Hidden products are dropped here, so nothing
    /// downstream can display them.
    pub fn load(&mut self, products: Vec<Product>) {
        self.products = visible_products(products);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> Vec<&Product> {
        search(&self.products, &self.query)
    }
}
