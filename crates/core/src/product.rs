//! Product entity and its request DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::ProductId;

/// Message returned whenever a create request lacks a name or a price.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and price are required";

/// Products are publicly visible unless stated otherwise.
pub const DEFAULT_VISIBILITY: bool = true;

fn default_visibility() -> bool {
    DEFAULT_VISIBILITY
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored catalog product as exposed on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default = "default_visibility")]
    pub visibility: bool,
}

impl Product {
    /// Apply a partial update in place. Fields absent from the patch are kept.
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(image_url) = &patch.image_url {
            self.image_url = Some(image_url.clone());
        }
        if let Some(visibility) = patch.visibility {
            self.visibility = visibility;
        }
    }

    /// Image URL if one is set and non-blank.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Body of a create request. Every field is optional at the parsing stage so
/// that a missing name or price is reported as a validation failure rather
/// than a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required)]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<bool>,
}

impl CreateProduct {
    /// Validate the request and resolve defaults.
    pub fn into_new_product(self) -> Result<NewProduct, CoreError> {
        self.validate()
            .map_err(|_| CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))?;

        match (self.name, self.price) {
            (Some(name), Some(price)) => Ok(NewProduct {
                name,
                price,
                description: self.description,
                image_url: self.image_url,
                visibility: self.visibility.unwrap_or(DEFAULT_VISIBILITY),
            }),
            _ => Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }
}

/// A validated product ready to be inserted. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub visibility: bool,
}

impl NewProduct {
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            image_url: self.image_url,
            visibility: self.visibility,
        }
    }
}

/// Partial update. `None` (absent or `null` in JSON) leaves a field unchanged.
/// Unknown keys, including `_id`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<bool>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.visibility.is_none()
    }
}
