//! BSON mapping of a product document.

use catalog_core::product::{NewProduct, Product, ProductPatch, DEFAULT_VISIBILITY};
use catalog_core::types::ProductId;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

fn default_visibility() -> bool {
    DEFAULT_VISIBILITY
}

/// A document in the `products` collection.
///
/// Absent optional fields are not written. Documents without a
/// `visibility` field read back as visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "imageUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(default = "default_visibility")]
    pub visibility: bool,
}

impl ProductDocument {
    /// Build a document for insertion with a freshly generated object id.
    pub fn from_new(input: NewProduct) -> Self {
        Self {
            id: ObjectId::new(),
            name: input.name,
            price: input.price,
            description: input.description,
            image_url: input.image_url,
            visibility: input.visibility,
        }
    }
}

impl TryFrom<ProductDocument> for Product {
    type Error = StoreError;

    fn try_from(doc: ProductDocument) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::parse(&doc.id.to_hex())?,
            name: doc.name,
            price: doc.price,
            description: doc.description,
            image_url: doc.image_url,
            visibility: doc.visibility,
        })
    }
}

pub fn object_id(id: &ProductId) -> Result<ObjectId, StoreError> {
    Ok(ObjectId::parse_str(id.as_str())?)
}

/// `$set` body for a partial update. Empty when the patch changes nothing.
pub fn set_document(patch: &ProductPatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert("name", name.as_str());
    }
    if let Some(price) = patch.price {
        set.insert("price", price);
    }
    if let Some(description) = &patch.description {
        set.insert("description", description.as_str());
    }
    if let Some(image_url) = &patch.image_url {
        set.insert("imageUrl", image_url.as_str());
    }
    if let Some(visibility) = patch.visibility {
        set.insert("visibility", visibility);
    }
    set
}
