//! Draft state of the product editor.

use crate::error::CoreError;
use crate::product::{CreateProduct, Product, ProductPatch};

/// Maximum description length accepted by the editor. The API itself does
/// not enforce a limit.
pub const DESCRIPTION_MAX_CHARS: usize = 250;

/// Editable copy of a product's fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: f64,
    description: String,
    pub image_url: String,
    pub visibility: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: 0.0,
            description: String::new(),
            image_url: String::new(),
            visibility: true,
        }
    }
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        let mut form = Self {
            name: product.name.clone(),
            price: product.price,
            description: String::new(),
            image_url: product.image_url.clone().unwrap_or_default(),
            visibility: product.visibility,
        };
        form.set_description(product.description.as_deref().unwrap_or_default());
        form
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the description, truncated to [`DESCRIPTION_MAX_CHARS`] characters.
    pub fn set_description(&mut self, text: &str) {
        self.description = text.chars().take(DESCRIPTION_MAX_CHARS).collect();
    }

    pub fn remaining_chars(&self) -> usize {
        DESCRIPTION_MAX_CHARS.saturating_sub(self.description.chars().count())
    }

    /// Set the price from raw input text. An empty field means zero.
    pub fn set_price_input(&mut self, raw: &str) -> Result<(), CoreError> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.price = 0.0;
            return Ok(());
        }
        match raw.parse::<f64>() {
            Ok(price) if price.is_finite() => {
                self.price = price;
                Ok(())
            }
            _ => Err(CoreError::Validation(format!("Invalid price '{raw}'"))),
        }
    }

    /// Create payload. Blank optional text fields are omitted.
    pub fn to_create(&self) -> CreateProduct {
        CreateProduct {
            name: Some(self.name.clone()),
            price: Some(self.price),
            description: non_blank(&self.description),
            image_url: non_blank(&self.image_url),
            visibility: Some(self.visibility),
        }
    }

    /// Update payload. Every field is sent so the stored record matches the
    /// form, including cleared text fields.
    pub fn to_patch(&self) -> ProductPatch {
        ProductPatch {
            name: Some(self.name.clone()),
            price: Some(self.price),
            description: Some(self.description.clone()),
            image_url: Some(self.image_url.clone()),
            visibility: Some(self.visibility),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
