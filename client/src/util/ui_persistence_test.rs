use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Draft {
    title: String,
    count: u32,
}

#[test]
fn json_round_trips_through_memory_store() {
    let store = MemoryStore::default();
    let draft = Draft { title: "t".to_owned(), count: 2 };
    save_json(&store, "draft", &draft);
    assert_eq!(load_json::<Draft>(&store, "draft"), Some(draft));
}

#[test]
fn corrupt_value_loads_as_none() {
    let store = MemoryStore::default();
    store.set("draft", "{not json");
    assert_eq!(load_json::<Draft>(&store, "draft"), None);
    assert_eq!(load_json::<Draft>(&store, "missing"), None);
}

#[test]
fn remove_deletes_key() {
    let store = MemoryStore::default();
    store.set("k", "v");
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_off_browser() {
    let store = BrowserStorage;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
    store.remove("k");
}
