//! Unit tests for the resource registry (allocation, reuse, status).

use std::collections::HashMap;

use handle_registry::{RegistryError, ResourceRegistry, NO_ERROR};

#[test]
fn test_new_registry_is_empty() {
    let registry: ResourceRegistry<i32> = ResourceRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert_eq!(registry.last_error(), None);
    assert_eq!(registry.last_error_message(), NO_ERROR);
}

#[test]
fn test_insert_only_ids_are_dense() {
    let mut registry = ResourceRegistry::new();
    for expected in 0..50 {
        assert_eq!(registry.insert(expected * 10), expected);
    }
    assert_eq!(registry.len(), 50);
}

#[test]
fn test_get_round_trip() {
    let mut registry = ResourceRegistry::new();
    let id = registry.insert("hello".to_string());
    assert_eq!(registry.get(id), Some(&"hello".to_string()));
    assert_eq!(registry.last_error(), None);
}

#[test]
fn test_exists_lifecycle() {
    let mut registry = ResourceRegistry::new();
    let id = registry.insert(42);
    assert!(registry.exists(id));

    registry.erase(id);
    assert!(!registry.exists(id));
}

#[test]
fn test_erase_recycles_minimum_first() {
    let mut registry = ResourceRegistry::new();
    let ids: Vec<_> = (0..5).map(|v| registry.insert(v)).collect();

    registry.erase(ids[3]);
    registry.erase(ids[1]);
    registry.erase(ids[4]);

    // Pool holds {1, 3, 4}; reuse must come back smallest-first.
    assert_eq!(registry.insert(100), 1);
    assert_eq!(registry.insert(101), 3);
    assert_eq!(registry.insert(102), 4);
    // Pool drained; fresh id = live count.
    assert_eq!(registry.insert(103), 5);
}

#[test]
fn test_erase_reinsert_scenario() {
    let mut registry = ResourceRegistry::new();
    let a = registry.insert(30);
    let b = registry.insert(72);
    let c = registry.insert(17);
    assert_eq!((a, b, c), (0, 1, 2));
    assert_eq!(registry.len(), 3);

    registry.erase(b);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.snapshot(), HashMap::from([(0, 30), (2, 17)]));

    registry.erase(a);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.snapshot(), HashMap::from([(2, 17)]));

    // Free pool holds {0, 1}; id 2 stays live and is skipped.
    let d = registry.insert_with(|_| 30);
    let e = registry.insert_with(|_| 11);
    let f = registry.insert_with(|_| 21);
    assert_eq!((d, e, f), (0, 1, 3));
    assert_eq!(registry.len(), 4);
    assert_eq!(
        registry.snapshot(),
        HashMap::from([(0, 30), (1, 11), (2, 17), (3, 21)])
    );
}

#[test]
fn test_erase_on_empty_sets_status() {
    let mut registry: ResourceRegistry<i32> = ResourceRegistry::new();
    registry.erase(0);

    assert_eq!(registry.last_error(), Some(RegistryError::EmptyRegistryRemoval));
    assert_ne!(registry.last_error_message(), NO_ERROR);
    assert!(registry.is_empty());

    // A later insert still mints id 0: nothing was pushed to the pool.
    assert_eq!(registry.insert(1), 0);
}

#[test]
fn test_erase_of_dead_id_does_not_pollute_pool() {
    let mut registry = ResourceRegistry::new();
    let a = registry.insert(1);

    registry.erase(99);
    assert_eq!(registry.last_error(), None);
    assert_eq!(registry.len(), 1);
    assert!(registry.exists(a));

    // 99 was never live, so it must not be handed out.
    assert_eq!(registry.insert(2), 1);
}

#[test]
fn test_erase_is_idempotent_per_entry() {
    let mut registry = ResourceRegistry::new();
    let a = registry.insert(1);
    let _b = registry.insert(2);

    registry.erase(a);
    registry.erase(a);
    assert_eq!(registry.len(), 1);

    // The double erase queued id 0 only once.
    assert_eq!(registry.insert(3), 0);
    assert_eq!(registry.insert(4), 2);
}

#[test]
fn test_get_missing_sets_status() {
    let registry: ResourceRegistry<i32> = ResourceRegistry::new();
    assert_eq!(registry.get(7), None);
    assert_eq!(registry.last_error(), Some(RegistryError::MissingEntry(7)));
    assert_ne!(registry.last_error_message(), NO_ERROR);
}

#[test]
fn test_value_defaults_on_miss() {
    let mut registry = ResourceRegistry::new();
    let id = registry.insert(42);

    assert_eq!(registry.value(id), 42);
    assert_eq!(registry.last_error(), None);

    assert_eq!(registry.value(id + 1), 0);
    assert_eq!(
        registry.last_error(),
        Some(RegistryError::MissingEntry(id + 1))
    );
}

#[test]
fn test_status_overwritten_by_next_call() {
    let mut registry: ResourceRegistry<i32> = ResourceRegistry::new();
    registry.erase(0);
    assert_eq!(registry.last_error(), Some(RegistryError::EmptyRegistryRemoval));

    // Any successful operation resets the status to neutral.
    let _ = registry.len();
    assert_eq!(registry.last_error(), None);
    assert_eq!(registry.last_error_message(), NO_ERROR);
}

#[test]
fn test_size_counts_successful_erases_only() {
    let mut registry = ResourceRegistry::new();
    let a = registry.insert(1);
    let b = registry.insert(2);

    registry.erase(a);
    registry.erase(b);
    registry.erase(a); // registry now empty: no-op with error status
    assert_eq!(registry.len(), 0);
}

#[test]
fn test_get_mut_updates_in_place() {
    let mut registry = ResourceRegistry::new();
    let id = registry.insert(String::from("before"));

    if let Some(value) = registry.get_mut(id) {
        *value = String::from("after");
    }
    assert_eq!(registry.get(id), Some(&String::from("after")));

    assert_eq!(registry.get_mut(42), None);
    assert_eq!(registry.last_error(), Some(RegistryError::MissingEntry(42)));
}

#[test]
fn test_iteration_covers_all_entries() {
    let mut registry = ResourceRegistry::new();
    let ids: Vec<_> = (0..4).map(|v| registry.insert(v * 2)).collect();

    let mut seen: Vec<_> = registry.iter().map(|(id, &v)| (id, v)).collect();
    seen.sort();
    assert_eq!(seen, vec![(0, 0), (1, 2), (2, 4), (3, 6)]);

    // Restartable: a second pass sees the same pairs.
    assert_eq!(registry.iter().count(), ids.len());

    for (_, value) in &mut registry {
        *value += 1;
    }
    assert_eq!(registry.get(ids[0]), Some(&1));
    assert_eq!(registry.get(ids[3]), Some(&7));
}

#[test]
fn test_clear_resets_allocation() {
    let mut registry = ResourceRegistry::new();
    let a = registry.insert(1);
    let _ = registry.insert(2);
    registry.erase(a);

    registry.clear();
    assert!(registry.is_empty());

    // Both the entries and the free pool are gone: ids start from 0 again.
    assert_eq!(registry.insert(3), 0);
    assert_eq!(registry.insert(4), 1);
}
