//! Autocomplete source for the image URL field of the product editor.

use indexmap::IndexSet;

use crate::product::Product;

/// Every distinct image URL seen during the current session, in the order
/// first seen.
///
/// The set only grows. It is never persisted and carries no consistency
/// guarantee with the store: a URL stays suggested after the product that
/// used it is deleted.
#[derive(Debug, Clone, Default)]
pub struct KnownImageUrls {
    urls: IndexSet<String>,
}

impl KnownImageUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a URL. Blank values are ignored.
    pub fn remember(&mut self, url: &str) {
        if url.trim().is_empty() {
            return;
        }
        if !self.urls.contains(url) {
            self.urls.insert(url.to_string());
        }
    }

    pub fn remember_all<'a>(&mut self, products: impl IntoIterator<Item = &'a Product>) {
        for product in products {
            if let Some(url) = product.image() {
                self.remember(url);
            }
        }
    }

    /// URLs containing `input` (case-insensitive), excluding an exact match.
    pub fn suggestions(&self, input: &str) -> Vec<&str> {
        let needle = input.to_lowercase();
        self.urls
            .iter()
            .filter(|url| url.as_str() != input && url.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }
}
