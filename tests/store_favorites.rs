mod common;

use std::sync::Arc;

use vehicle_catalog::application::services::FavoritesService;
use vehicle_catalog::infrastructure::persistence::NullStorage;

use common::{MemoryStorage, vehicle};

#[test]
fn test_toggle_twice_returns_true_then_false() {
    let mut store = FavoritesService::load(Arc::new(NullStorage::new()));
    let v = vehicle("a", 2021, 20_000.0);

    assert!(store.toggle(&v), "first toggle favorites");
    assert!(store.contains("a"));

    assert!(!store.toggle(&v), "second toggle unfavorites");
    assert!(!store.contains("a"));
}

#[test]
fn test_unbounded_growth_with_dedup() {
    let mut store = FavoritesService::load(Arc::new(NullStorage::new()));

    for i in 0..50 {
        assert!(store.add(&vehicle(&format!("v{i}"), 2020, 10_000.0)));
    }
    assert_eq!(store.len(), 50);

    assert!(!store.add(&vehicle("v25", 2020, 10_000.0)));
    assert_eq!(store.len(), 50);
}

#[test]
fn test_state_survives_reconstruction() {
    let storage = Arc::new(MemoryStorage::new());

    {
        let mut store = FavoritesService::load(Arc::clone(&storage));
        store.toggle(&vehicle("a", 2021, 20_000.0));
        store.toggle(&vehicle("b", 2022, 25_000.0));
        store.toggle(&vehicle("a", 2021, 20_000.0)); // unfavorite again
    }

    let store = FavoritesService::load(storage);
    assert_eq!(store.len(), 1);
    assert!(!store.contains("a"));
    assert!(store.contains("b"));
}

#[test]
fn test_remove_absent_id_is_silent() {
    let mut store = FavoritesService::load(Arc::new(NullStorage::new()));
    store.add(&vehicle("a", 2021, 20_000.0));

    store.remove("not-there");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_clear_persists_empty_list() {
    let storage = Arc::new(MemoryStorage::new());

    {
        let mut store = FavoritesService::load(Arc::clone(&storage));
        store.add(&vehicle("a", 2021, 20_000.0));
        store.clear();
    }

    let store = FavoritesService::load(storage);
    assert!(store.is_empty());
}
