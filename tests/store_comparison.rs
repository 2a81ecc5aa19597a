mod common;

use std::sync::Arc;

use vehicle_catalog::application::services::{COMPARE_NAMESPACE, ComparisonService};
use vehicle_catalog::infrastructure::persistence::{JsonFileStorage, NullStorage};

use common::{FailingStorage, MemoryStorage, vehicle};

#[test]
fn test_capacity_and_duplicate_rules() {
    let mut store = ComparisonService::load(Arc::new(NullStorage::new()), 3);

    assert!(store.add(&vehicle("a", 2020, 15_000.0)));
    assert!(store.add(&vehicle("b", 2021, 18_000.0)));
    assert!(!store.add(&vehicle("a", 2020, 15_000.0)), "duplicate id");
    assert!(store.add(&vehicle("c", 2022, 22_000.0)));

    // A 4th distinct vehicle is refused and the list stays at 3.
    assert!(!store.add(&vehicle("d", 2023, 30_000.0)));
    assert_eq!(store.len(), 3);
    assert_eq!(
        common::ids(store.vehicles()),
        vec!["a", "b", "c"],
        "insertion order preserved"
    );
}

#[test]
fn test_state_survives_reconstruction() {
    let storage = Arc::new(MemoryStorage::new());

    {
        let mut store = ComparisonService::load(Arc::clone(&storage), 3);
        store.add(&vehicle("a", 2020, 15_000.0));
        store.add(&vehicle("b", 2021, 18_000.0));
    }

    // A new session over the same storage sees the persisted list.
    let store = ComparisonService::load(Arc::clone(&storage), 3);
    assert_eq!(store.len(), 2);
    assert!(store.contains("a"));
    assert!(store.contains("b"));
}

#[test]
fn test_removal_down_to_empty_persists() {
    let storage = Arc::new(MemoryStorage::new());

    {
        let mut store = ComparisonService::load(Arc::clone(&storage), 3);
        store.add(&vehicle("a", 2020, 15_000.0));
        store.remove("a");
    }

    let store = ComparisonService::load(storage, 3);
    assert!(store.is_empty());
}

#[test]
fn test_clear_persists_empty_list() {
    let storage = Arc::new(MemoryStorage::new());

    {
        let mut store = ComparisonService::load(Arc::clone(&storage), 3);
        store.add(&vehicle("a", 2020, 15_000.0));
        store.add(&vehicle("b", 2021, 18_000.0));
        store.clear();
    }

    let store = ComparisonService::load(storage, 3);
    assert!(store.is_empty());
}

#[test]
fn test_write_failures_do_not_break_the_session() {
    let mut store = ComparisonService::load(Arc::new(FailingStorage), 3);

    assert!(store.add(&vehicle("a", 2020, 15_000.0)));
    assert!(store.contains("a"));
    store.remove("a");
    assert!(store.is_empty());
}

#[test]
fn test_file_backed_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(JsonFileStorage::new(dir.path()));

    {
        let mut store = ComparisonService::load(Arc::clone(&storage), 3);
        store.add(&vehicle("a", 2020, 15_000.0));
    }

    assert!(dir.path().join(format!("{COMPARE_NAMESPACE}.json")).exists());

    let store = ComparisonService::load(storage, 3);
    assert!(store.contains("a"));
}
