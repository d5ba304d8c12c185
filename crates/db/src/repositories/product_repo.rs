use std::time::Duration;

use async_trait::async_trait;
use catalog_core::product::{NewProduct, Product, ProductPatch};
use catalog_core::types::ProductId;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use crate::connector::{MongoConnector, MongoDialer};
use crate::error::StoreError;
use crate::models::product::{object_id, set_document, ProductDocument};
use crate::PRODUCTS_COLLECTION;

/// Storage operations behind the Collection API.
///
/// Every call is a single store round-trip; there is no cross-call
/// transaction and concurrent updates to one record resolve last write wins.
#[async_trait]
pub trait ProductRepo: Send + Sync {
    /// All products in insertion order.
    async fn list_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn create(&self, input: NewProduct) -> Result<Product, StoreError>;

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, StoreError>;

    /// Merge `patch` into the record. Returns the updated record, or `None`
    /// if no record has that id.
    async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> Result<Option<Product>, StoreError>;

    /// Returns `true` if a record was removed.
    async fn delete(&self, id: &ProductId) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}

/// [`ProductRepo`] backed by a MongoDB collection.
pub struct MongoProductRepo {
    connector: MongoConnector,
}

impl MongoProductRepo {
    pub fn new(connector: MongoConnector) -> Self {
        Self { connector }
    }

    /// `timeout` bounds server selection and connect for every dial.
    pub fn from_uri(uri: &str, fallback_database: &str, timeout: Duration) -> Self {
        Self::new(MongoConnector::new(MongoDialer::new(
            uri,
            fallback_database,
            timeout,
        )))
    }

    async fn collection(&self) -> Result<Collection<ProductDocument>, StoreError> {
        let database = self.connector.get().await?;
        Ok(database.collection(PRODUCTS_COLLECTION))
    }
}

#[async_trait]
impl ProductRepo for MongoProductRepo {
    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        let documents: Vec<ProductDocument> = self
            .collection()
            .await?
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(Product::try_from).collect()
    }

    async fn create(&self, input: NewProduct) -> Result<Product, StoreError> {
        let document = ProductDocument::from_new(input);
        self.collection().await?.insert_one(&document).await?;
        Product::try_from(document)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        let oid = object_id(id)?;
        self.collection()
            .await?
            .find_one(doc! { "_id": oid })
            .await?
            .map(Product::try_from)
            .transpose()
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let oid = object_id(id)?;
        let set = set_document(patch);
        self.collection()
            .await?
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?
            .map(Product::try_from)
            .transpose()
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, StoreError> {
        let oid = object_id(id)?;
        let result = self
            .collection()
            .await?
            .delete_one(doc! { "_id": oid })
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let database = self.connector.get().await?;
        database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
