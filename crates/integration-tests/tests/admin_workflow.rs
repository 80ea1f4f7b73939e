//! Catalog administration journeys: role gating, CRUD round trips, and the
//! workflow's loading/error bookkeeping, driven against the shared
//! in-memory catalog fake.

#![allow(clippy::unwrap_used)]

use tienda_core::Role;
use tienda_integration_tests::{FakeCatalog, memory_store, sample_catalog};
use tienda_storefront::catalog::CatalogApi;
use tienda_storefront::models::ProductInput;
use tienda_storefront::services::auth::AuthError;
use tienda_storefront::services::{AuthService, ProductWorkflow};

fn input(name: &str, price: &str, category: &str) -> ProductInput {
    ProductInput {
        name: name.to_owned(),
        price: price.parse().unwrap(),
        description: String::new(),
        category: category.to_owned(),
        image: String::new(),
    }
}

#[test]
fn test_admin_gate_rejects_anonymous_and_shopper() {
    let store = memory_store();
    let mut auth = AuthService::load(store);

    assert!(matches!(
        auth.require_role(Role::Admin),
        Err(AuthError::NotAuthenticated)
    ));

    auth.login("user@tienda.com", "user123").unwrap();
    assert!(matches!(
        auth.require_role(Role::Admin),
        Err(AuthError::Forbidden { .. })
    ));
}

#[test]
fn test_admin_gate_admits_seed_admin() {
    let store = memory_store();
    let mut auth = AuthService::load(store);
    auth.login("admin@tienda.com", "admin123").unwrap();
    assert!(auth.require_role(Role::Admin).is_ok());
}

#[tokio::test]
async fn test_admin_crud_round_trip() {
    let catalog = sample_catalog();
    let mut workflow = ProductWorkflow::new(&catalog);

    workflow.refresh().await.unwrap();
    assert_eq!(workflow.products().len(), 3);

    // Create
    let lamp = workflow
        .add_product(input("Lámpara", "24.50", "hogar"))
        .await
        .unwrap();
    assert_eq!(workflow.products().len(), 4);
    assert_eq!(catalog.listing().len(), 4);

    // Update
    let updated = workflow
        .update_product(&lamp.id, input("Lámpara LED", "29.00", "hogar"))
        .await
        .unwrap();
    assert_eq!(updated.name, "Lámpara LED");
    assert_eq!(
        workflow
            .products()
            .iter()
            .find(|p| p.id == lamp.id)
            .unwrap()
            .name,
        "Lámpara LED"
    );

    // Delete
    workflow.delete_product(&lamp.id).await.unwrap();
    assert_eq!(workflow.products().len(), 3);
    assert!(catalog.listing().iter().all(|p| p.id != lamp.id));

    assert!(!workflow.is_loading());
    assert!(workflow.last_error().is_none());
}

#[tokio::test]
async fn test_created_product_is_visible_to_shoppers() {
    let catalog = sample_catalog();

    let mut workflow = ProductWorkflow::new(&catalog);
    let poster = workflow
        .add_product(input("Póster", "8.00", "decoración"))
        .await
        .unwrap();

    // A shopper-side fetch against the same backend sees the new product
    let api = &catalog;
    let fetched = api.fetch_product(&poster.id).await.unwrap();
    assert_eq!(fetched.name, "Póster");
    assert!(
        api.fetch_categories()
            .await
            .unwrap()
            .contains(&"decoración".to_owned())
    );
}

#[tokio::test]
async fn test_refresh_failure_empties_list_and_records_error() {
    let catalog = sample_catalog();
    let mut workflow = ProductWorkflow::new(&catalog);
    workflow.refresh().await.unwrap();
    assert_eq!(workflow.products().len(), 3);

    catalog.set_fail(true);
    assert!(workflow.refresh().await.is_err());
    assert!(workflow.products().is_empty());
    assert!(workflow.last_error().unwrap().contains("500"));

    // Recovery on the next successful refresh
    catalog.set_fail(false);
    workflow.refresh().await.unwrap();
    assert_eq!(workflow.products().len(), 3);
    assert!(workflow.last_error().is_none());
}

#[tokio::test]
async fn test_failed_mutation_leaves_both_sides_untouched() {
    let catalog = sample_catalog();
    let mut workflow = ProductWorkflow::new(&catalog);
    workflow.refresh().await.unwrap();

    catalog.set_fail(true);
    assert!(
        workflow
            .add_product(input("Fantasma", "1.00", "nada"))
            .await
            .is_err()
    );
    assert!(workflow.delete_product(&"1".into()).await.is_err());

    assert_eq!(workflow.products().len(), 3);
    assert_eq!(catalog.listing().len(), 3);
}

#[tokio::test]
async fn test_update_unknown_product_is_not_found() {
    let catalog = FakeCatalog::default();
    let mut workflow = ProductWorkflow::new(&catalog);

    let err = workflow
        .update_product(&"999".into(), input("Nada", "1.00", "nada"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("999"));
}

#[tokio::test]
async fn test_category_refresh_tracks_listing() {
    let catalog = sample_catalog();
    let mut workflow = ProductWorkflow::new(&catalog);

    workflow.refresh_categories().await.unwrap();
    assert_eq!(workflow.categories(), ["electrónica", "hogar", "ropa"]);

    workflow
        .add_product(input("Póster", "8.00", "decoración"))
        .await
        .unwrap();
    workflow.refresh_categories().await.unwrap();
    assert_eq!(
        workflow.categories(),
        ["electrónica", "hogar", "ropa", "decoración"]
    );
}
