//! Behaviour of the in-memory product store.

use std::collections::HashSet;
use std::sync::Arc;

use assert_matches::assert_matches;
use catalog_core::product::{NewProduct, ProductPatch};
use catalog_core::types::ProductId;
use catalog_db::{InMemoryProductRepo, ProductRepo, StoreError};

fn new_product(name: &str, price: f64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price,
        description: Some("Handmade".into()),
        image_url: None,
        visibility: true,
    }
}

#[tokio::test]
async fn create_then_find() {
    let repo = InMemoryProductRepo::new();
    let created = repo.create(new_product("Bowl", 120.0)).await.unwrap();

    let found = repo.find_by_id(&created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let repo = InMemoryProductRepo::new();
    for name in ["A", "B", "C"] {
        repo.create(new_product(name, 100.0)).await.unwrap();
    }

    let names: Vec<_> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn update_merges_only_given_fields() {
    let repo = InMemoryProductRepo::new();
    let created = repo.create(new_product("Bowl", 120.0)).await.unwrap();

    let patch = ProductPatch {
        visibility: Some(false),
        ..Default::default()
    };
    let updated = repo.update(&created.id, &patch).await.unwrap().unwrap();

    assert!(!updated.visibility);
    assert_eq!(updated.name, "Bowl");
    assert_eq!(updated.price, 120.0);
    assert_eq!(updated.description.as_deref(), Some("Handmade"));
}

#[tokio::test]
async fn empty_patch_returns_current_record() {
    let repo = InMemoryProductRepo::new();
    let created = repo.create(new_product("Bowl", 120.0)).await.unwrap();

    let unchanged = repo
        .update(&created.id, &ProductPatch::default())
        .await
        .unwrap();
    assert_eq!(unchanged, Some(created));
}

#[tokio::test]
async fn update_and_delete_of_unknown_id() {
    let repo = InMemoryProductRepo::new();
    let id = ProductId::parse("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();

    assert_eq!(repo.update(&id, &ProductPatch::default()).await.unwrap(), None);
    assert!(!repo.delete(&id).await.unwrap());
}

#[tokio::test]
async fn delete_removes_once() {
    let repo = InMemoryProductRepo::new();
    let created = repo.create(new_product("Bowl", 120.0)).await.unwrap();

    assert!(repo.delete(&created.id).await.unwrap());
    assert!(!repo.delete(&created.id).await.unwrap());
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let repo = Arc::new(InMemoryProductRepo::new());

    let tasks: Vec<_> = (0..25)
        .map(|n| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move { repo.create(new_product(&format!("P{n}"), 60.0)).await })
        })
        .collect();

    let mut ids = HashSet::new();
    for task in tasks {
        ids.insert(task.await.unwrap().unwrap().id);
    }

    assert_eq!(ids.len(), 25);
    assert_eq!(repo.len().await, 25);
}

#[tokio::test]
async fn unavailable_store_fails_every_call() {
    let repo = InMemoryProductRepo::new();
    repo.set_available(false);

    assert_matches!(repo.list_all().await, Err(StoreError::Unavailable(_)));
    assert_matches!(
        repo.create(new_product("Bowl", 1.0)).await,
        Err(StoreError::Unavailable(_))
    );
    assert_matches!(repo.health_check().await, Err(StoreError::Unavailable(_)));

    repo.set_available(true);
    assert!(repo.list_all().await.unwrap().is_empty());
}
