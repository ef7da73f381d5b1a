//! Visitor registry behavior, exercised against a throwaway SQLite database.
//!
//! The registry itself is driver-agnostic (it runs through the sqlx `Any`
//! pool), so these tests validate the exact SQL semantics the HTTP surface
//! depends on without needing a PostgreSQL server.

use database::{DbError, Visitor, VisitorRegistry, connect_url, init_schema};
use tempfile::TempDir;

/// Opens a fresh registry backed by a SQLite file in its own temp dir.
///
/// The `TempDir` is returned so the database file outlives the test body.
async fn fresh_registry() -> (TempDir, VisitorRegistry) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let url = format!("sqlite://{}/visitors.db?mode=rwc", dir.path().display());
    let pool = connect_url(&url).await.expect("failed to open pool");
    init_schema(&pool).await.expect("failed to init schema");
    (dir, VisitorRegistry::new(pool))
}

fn visitor(name: &str, plate: &str) -> Visitor {
    Visitor {
        name: name.to_string(),
        plate: plate.to_string(),
    }
}

#[tokio::test]
async fn insert_then_lookup_returns_exactly_that_record() {
    let (_dir, registry) = fresh_registry().await;
    let v = visitor("Jordy", "ABC-123");

    registry.insert(&v).await.unwrap();

    let found = registry.list_visitors(Some("ABC-123")).await.unwrap();
    assert_eq!(found, vec![v]);
}

#[tokio::test]
async fn list_without_filter_returns_all_records() {
    let (_dir, registry) = fresh_registry().await;
    registry.insert(&visitor("Jordy", "ABC-123")).await.unwrap();
    registry.insert(&visitor("Piet", "DEF-456")).await.unwrap();

    let all = registry.list_visitors(None).await.unwrap();
    assert_eq!(all.len(), 2);

    // Lookup is exact-match only; a prefix must not match.
    let none = registry.list_visitors(Some("ABC")).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn exists_tracks_insert_and_delete() {
    let (_dir, registry) = fresh_registry().await;

    assert!(!registry.exists_by_plate("GHI-789").await.unwrap());

    registry.insert(&visitor("Anna", "GHI-789")).await.unwrap();
    assert!(registry.exists_by_plate("GHI-789").await.unwrap());

    registry.delete_by_plate("GHI-789").await.unwrap();
    assert!(!registry.exists_by_plate("GHI-789").await.unwrap());
}

#[tokio::test]
async fn duplicate_insert_is_rejected_and_leaves_one_row() {
    let (_dir, registry) = fresh_registry().await;
    registry.insert(&visitor("Jordy", "ABC-123")).await.unwrap();

    let err = registry
        .insert(&visitor("Piet", "ABC-123"))
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::DuplicatePlate(_)));

    // The original record is untouched.
    let found = registry.list_visitors(Some("ABC-123")).await.unwrap();
    assert_eq!(found, vec![visitor("Jordy", "ABC-123")]);
}

#[tokio::test]
async fn upsert_replaces_the_name_for_an_existing_plate() {
    let (_dir, registry) = fresh_registry().await;
    registry.insert(&visitor("Jordy", "ABC-123")).await.unwrap();

    registry.upsert(&visitor("Piet", "ABC-123")).await.unwrap();

    let found = registry.list_visitors(Some("ABC-123")).await.unwrap();
    assert_eq!(found, vec![visitor("Piet", "ABC-123")]);
}

#[tokio::test]
async fn upsert_inserts_when_the_plate_is_new() {
    let (_dir, registry) = fresh_registry().await;

    registry.upsert(&visitor("Anna", "NEW-001")).await.unwrap();

    assert!(registry.exists_by_plate("NEW-001").await.unwrap());
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (_dir, registry) = fresh_registry().await;
    registry.insert(&visitor("Jordy", "ABC-123")).await.unwrap();

    assert_eq!(registry.delete_by_plate("ABC-123").await.unwrap(), 1);
    assert!(
        registry
            .list_visitors(Some("ABC-123"))
            .await
            .unwrap()
            .is_empty()
    );

    // Second delete finds nothing and must not error.
    assert_eq!(registry.delete_by_plate("ABC-123").await.unwrap(), 0);
}
