//! Store guarantees: upsert idempotence, seed guard, remove no-op

use gridkit::{Entity, EntityStore, MemoryBackend, Value};
use std::sync::Arc;

fn test_store() -> EntityStore {
    EntityStore::new(Arc::new(MemoryBackend::new()))
}

/// Upserting the same id twice leaves exactly one entity; a third upsert
/// with changed fields replaces in place without changing length
#[test]
fn test_upsert_idempotent_by_id() {
    let store = test_store();
    let e = Entity::new("emp-1").with_field("name", "Dana");

    store.upsert("employees", e.clone()).unwrap();
    store.upsert("employees", e.clone()).unwrap();

    let listed = store.list("employees").unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], e);

    store.upsert("employees", Entity::new("emp-2")).unwrap();
    store
        .upsert("employees", Entity::new("emp-1").with_field("name", "Dana Q."))
        .unwrap();

    let listed = store.list("employees").unwrap();
    assert_eq!(listed.len(), 2);
    // emp-1 kept its position (after the prepended emp-2)
    assert_eq!(listed[1].id, "emp-1");
    assert_eq!(listed[1].field("name"), Some(&Value::Str("Dana Q.".into())));
}

/// The first seed wins; a second seed never replaces it
#[test]
fn test_seed_if_empty_guard() {
    let store = test_store();
    let seed = vec![Entity::new("a"), Entity::new("b")];
    let other = vec![Entity::new("x")];

    store.seed_if_empty("items", &seed).unwrap();
    store.seed_if_empty("items", &other).unwrap();

    let listed = store.list("items").unwrap();
    assert_eq!(listed, seed);
}

/// Removing a nonexistent id changes nothing
#[test]
fn test_remove_non_member_is_noop() {
    let store = test_store();
    let seed = vec![Entity::new("a"), Entity::new("b")];
    store.seed_if_empty("items", &seed).unwrap();

    store.remove("items", "nonexistent-id").unwrap();

    assert_eq!(store.list("items").unwrap(), seed);
}

/// generate_id output is collision-free over a burst of calls
#[test]
fn test_generate_id_burst_unique() {
    let ids: std::collections::HashSet<String> =
        (0..1000).map(|_| gridkit::generate_id("rec")).collect();
    assert_eq!(ids.len(), 1000);
}
