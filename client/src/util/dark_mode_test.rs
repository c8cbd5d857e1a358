#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::util::ui_persistence::MemoryStore;

#[test]
fn missing_preference_falls_back_to_light_outside_browser() {
    assert!(!read_preference(&MemoryStore::default()));
}

#[test]
fn toggle_flips_and_persists() {
    let store = MemoryStore::default();
    assert!(toggle(&store, false));
    assert!(read_preference(&store));
    assert!(!toggle(&store, true));
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("false"));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
