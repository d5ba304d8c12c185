//! In-process product store.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use catalog_core::product::{NewProduct, Product, ProductPatch};
use catalog_core::types::ProductId;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::repositories::ProductRepo;

/// [`ProductRepo`] keeping records in a vector behind an async lock.
///
/// Ids are generated the same way MongoDB generates them, so records look
/// identical to ones coming from the real store. [`set_available`] lets a
/// caller simulate an unreachable backend.
///
/// [`set_available`]: InMemoryProductRepo::set_available
#[derive(Default)]
pub struct InMemoryProductRepo {
    products: RwLock<Vec<Product>>,
    unavailable: AtomicBool,
}

impl InMemoryProductRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store switched off".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepo for InMemoryProductRepo {
    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        self.check_available()?;
        Ok(self.products.read().await.clone())
    }

    async fn create(&self, input: NewProduct) -> Result<Product, StoreError> {
        self.check_available()?;
        let id = ProductId::parse(&ObjectId::new().to_hex())?;
        let product = input.with_id(id);
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        self.check_available()?;
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        self.check_available()?;
        let mut products = self.products.write().await;
        Ok(products.iter_mut().find(|p| &p.id == id).map(|product| {
            product.apply(patch);
            product.clone()
        }))
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| &p.id != id);
        Ok(products.len() < before)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}
