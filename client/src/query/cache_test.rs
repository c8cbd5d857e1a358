use super::*;
use futures::channel::oneshot;
use futures::executor::block_on;
use futures::future::join3;
use std::cell::Cell;

fn manual_cache(config: CacheConfig) -> (QueryCache, Rc<Cell<i64>>) {
    let now = Rc::new(Cell::new(1_000));
    let clock = now.clone();
    (QueryCache::with_clock(config, move || clock.get()), now)
}

fn key(parts: &[&str]) -> QueryKey {
    parts.iter().copied().collect()
}

fn counting_fetch(calls: Rc<Cell<u32>>, value: i64) -> impl Future<Output = Result<i64, ApiError>> + 'static {
    calls.set(calls.get() + 1);
    async move { Ok(value) }
}

fn record_events(cache: &QueryCache, key: &QueryKey) -> Rc<RefCell<Vec<CacheEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    cache.subscribe(key, move |_, event| sink.borrow_mut().push(event));
    events
}

// =============================================================
// Fetch and freshness
// =============================================================

#[test]
fn fresh_data_is_served_without_refetch() {
    let (cache, now) = manual_cache(CacheConfig { stale_ms: 100, cache_ms: 1_000 });
    let calls = Rc::new(Cell::new(0));
    let k = key(&["persons"]);

    let first = block_on(cache.fetch(&k, || counting_fetch(calls.clone(), 1))).unwrap();
    now.set(now.get() + 50);
    let second = block_on(cache.fetch(&k, || counting_fetch(calls.clone(), 2))).unwrap();

    assert_eq!((*first, *second), (1, 1));
    assert_eq!(calls.get(), 1);
    assert_eq!(cache.state(&k).status, QueryStatus::Success);
    assert!(!cache.is_stale(&k));
}

#[test]
fn stale_data_is_refetched_after_stale_window() {
    let (cache, now) = manual_cache(CacheConfig { stale_ms: 100, cache_ms: 1_000 });
    let calls = Rc::new(Cell::new(0));
    let k = key(&["persons"]);

    block_on(cache.fetch(&k, || counting_fetch(calls.clone(), 1))).unwrap();
    now.set(now.get() + 100);
    assert!(cache.is_stale(&k));
    let value = block_on(cache.fetch(&k, || counting_fetch(calls.clone(), 2))).unwrap();

    assert_eq!(*value, 2);
    assert_eq!(calls.get(), 2);
    assert_eq!(cache.state(&k).updated_at, Some(1_100));
}

#[test]
fn concurrent_fetches_of_one_key_share_a_request() {
    let (cache, _) = manual_cache(CacheConfig::default());
    let k = key(&["catalog", "services"]);
    let calls = Rc::new(Cell::new(0));
    let (tx, rx) = oneshot::channel::<i64>();

    let first = {
        let calls = calls.clone();
        cache.fetch(&k, move || {
            calls.set(calls.get() + 1);
            async move { rx.await.map_err(|_| ApiError::Network("cancelled".to_owned())) }
        })
    };
    let second = {
        let calls = calls.clone();
        cache.fetch(&k, move || counting_fetch(calls.clone(), 99))
    };
    let release = async move {
        tx.send(7).unwrap();
        Ok::<Rc<i64>, ApiError>(Rc::new(0))
    };

    let (a, b, _) = block_on(join3(first, second, release));
    assert_eq!(*a.unwrap(), 7);
    assert_eq!(*b.unwrap(), 7);
    assert_eq!(calls.get(), 1);
    assert!(!cache.state(&k).is_fetching);
}

#[test]
fn failed_refetch_keeps_previous_data() {
    let (cache, now) = manual_cache(CacheConfig { stale_ms: 10, cache_ms: 1_000 });
    let k = key(&["wake", "devices"]);
    block_on(cache.fetch(&k, || async { Ok::<_, ApiError>(vec![1, 2]) })).unwrap();
    now.set(now.get() + 20);

    let err = block_on(cache.fetch(&k, || async { Err::<Vec<i32>, _>(ApiError::Network("down".to_owned())) }))
        .unwrap_err();

    assert_eq!(err, ApiError::Network("down".to_owned()));
    assert_eq!(*cache.get::<Vec<i32>>(&k).unwrap(), vec![1, 2]);
    let state = cache.state(&k);
    assert_eq!(state.status, QueryStatus::Success);
    assert_eq!(state.error, Some(ApiError::Network("down".to_owned())));
}

#[test]
fn first_fetch_failure_reports_error_status() {
    let (cache, _) = manual_cache(CacheConfig::default());
    let k = key(&["skills"]);
    let _ = block_on(cache.fetch(&k, || async { Err::<i32, _>(ApiError::Rejected("nope".to_owned())) }));
    assert_eq!(cache.state(&k).status, QueryStatus::Error);
    assert_eq!(cache.get::<i32>(&k), None);
}

#[test]
fn type_mismatch_is_a_decode_error() {
    let (cache, _) = manual_cache(CacheConfig::default());
    let k = key(&["docs", "pages"]);
    cache.set_data(&k, 5_i64);
    let err = block_on(cache.fetch(&k, || async { Ok::<String, ApiError>(String::new()) })).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn idle_state_for_unknown_key() {
    let (cache, _) = manual_cache(CacheConfig::default());
    let state = cache.state(&key(&["nothing"]));
    assert_eq!(state.status, QueryStatus::Idle);
    assert!(state.is_stale);
    assert!(cache.is_empty());
}

// =============================================================
// Invalidation
// =============================================================

#[test]
fn invalidate_marks_only_the_prefix_subtree() {
    let (cache, _) = manual_cache(CacheConfig::default());
    let person = key(&["persons", "1"]);
    let docs = key(&["persons", "1", "documents"]);
    let other = key(&["persons", "2", "documents"]);
    let files = key(&["files", ""]);
    for k in [&person, &docs, &other, &files] {
        cache.set_data(k, 0_u8);
    }

    let marked = cache.invalidate(&person);

    assert_eq!(marked, 2);
    assert!(cache.is_stale(&person));
    assert!(cache.is_stale(&docs));
    assert!(!cache.is_stale(&other));
    assert!(!cache.is_stale(&files));
}

#[test]
fn invalidate_notifies_listeners_under_prefix() {
    let (cache, _) = manual_cache(CacheConfig::default());
    let docs = key(&["persons", "1", "documents"]);
    let contacts = key(&["persons", "1", "contacts"]);
    let docs_events = record_events(&cache, &docs);
    let contact_events = record_events(&cache, &contacts);

    cache.invalidate(&docs);

    assert_eq!(*docs_events.borrow(), vec![CacheEvent::Invalidated]);
    assert!(contact_events.borrow().is_empty());
}

#[test]
fn invalidated_entry_is_refetched_even_when_young() {
    let (cache, _) = manual_cache(CacheConfig::default());
    let calls = Rc::new(Cell::new(0));
    let k = key(&["docs", "pages"]);
    block_on(cache.fetch(&k, || counting_fetch(calls.clone(), 1))).unwrap();
    cache.invalidate(&k);
    let value = block_on(cache.fetch(&k, || counting_fetch(calls.clone(), 2))).unwrap();
    assert_eq!(*value, 2);
    assert!(!cache.is_stale(&k));
}

#[test]
fn invalidating_during_fetch_lands_stale_and_asks_for_refetch() {
    let (cache, _) = manual_cache(CacheConfig::default());
    let k = key(&["finance", "2026-10", "transactions"]);
    let events = record_events(&cache, &k);
    let (tx, rx) = oneshot::channel::<i64>();

    let fetch = cache.fetch(&k, move || async move { rx.await.map_err(|_| ApiError::Network("x".to_owned())) });
    let cache_handle = cache.clone();
    let k2 = k.clone();
    let meddle = async move {
        cache_handle.invalidate(&k2.parent().unwrap());
        tx.send(1).unwrap();
        Ok::<Rc<i64>, ApiError>(Rc::new(0))
    };
    let (value, _) = block_on(futures::future::join(fetch, meddle));

    assert_eq!(*value.unwrap(), 1);
    assert!(cache.is_stale(&k));
    assert_eq!(*events.borrow(), vec![CacheEvent::Invalidated, CacheEvent::Invalidated]);
}

// =============================================================
// Direct writes, removal, gc
// =============================================================

#[test]
fn set_data_is_fresh_and_notifies() {
    let (cache, _) = manual_cache(CacheConfig::default());
    let k = key(&["persons", "3"]);
    let events = record_events(&cache, &k);
    cache.set_data(&k, "Lin".to_owned());
    assert_eq!(cache.get::<String>(&k).as_deref().map(String::as_str), Some("Lin"));
    assert!(!cache.is_stale(&k));
    assert_eq!(*events.borrow(), vec![CacheEvent::Updated]);
}

#[test]
fn update_data_edits_typed_value() {
    let (cache, _) = manual_cache(CacheConfig::default());
    let k = key(&["wake", "devices"]);
    assert!(!cache.update_data::<Vec<u8>>(&k, |v| v.push(1)));
    cache.set_data(&k, vec![1_u8]);
    assert!(cache.update_data::<Vec<u8>>(&k, |v| v.push(2)));
    assert_eq!(*cache.get::<Vec<u8>>(&k).unwrap(), vec![1, 2]);
}

#[test]
fn remove_drops_subtree_and_notifies() {
    let (cache, _) = manual_cache(CacheConfig::default());
    let person = key(&["persons", "9"]);
    let docs = key(&["persons", "9", "documents"]);
    cache.set_data(&person, 1_u8);
    cache.set_data(&docs, 2_u8);
    cache.set_data(&key(&["persons"]), 3_u8);
    let events = record_events(&cache, &docs);

    assert_eq!(cache.remove(&person), 2);
    assert_eq!(cache.len(), 1);
    assert_eq!(*events.borrow(), vec![CacheEvent::Removed]);
}

#[test]
fn result_of_removed_in_flight_fetch_is_not_stored() {
    let (cache, _) = manual_cache(CacheConfig::default());
    let k = key(&["skills", "s1"]);
    let (tx, rx) = oneshot::channel::<i64>();
    let fetch = cache.fetch(&k, move || async move { rx.await.map_err(|_| ApiError::Network("x".to_owned())) });
    let cache_handle = cache.clone();
    let k2 = k.clone();
    let meddle = async move {
        cache_handle.remove(&k2);
        tx.send(4).unwrap();
        Ok::<Rc<i64>, ApiError>(Rc::new(0))
    };
    let (value, _) = block_on(futures::future::join(fetch, meddle));
    assert_eq!(*value.unwrap(), 4);
    assert_eq!(cache.get::<i64>(&k), None);
}

#[test]
fn gc_drops_only_old_unobserved_entries() {
    let (cache, now) = manual_cache(CacheConfig { stale_ms: 10, cache_ms: 100 });
    let old = key(&["a"]);
    let watched = key(&["b"]);
    let young = key(&["c"]);
    cache.set_data(&old, 1_u8);
    cache.set_data(&watched, 1_u8);
    let id = cache.subscribe(&watched, |_, _| {});
    now.set(now.get() + 150);
    cache.set_data(&young, 1_u8);

    assert_eq!(cache.gc(), 1);
    assert!(cache.get::<u8>(&old).is_none());
    assert!(cache.get::<u8>(&watched).is_some());
    assert!(cache.get::<u8>(&young).is_some());

    assert!(cache.unsubscribe(id));
    assert!(!cache.unsubscribe(id));
    assert_eq!(cache.gc(), 1);
}

#[test]
fn removing_person_detail_drops_its_tabs_only() {
    use crate::query::keys::persons;

    let (cache, _) = manual_cache(CacheConfig::default());
    cache.set_data(&persons::all(), vec![1_i64, 2]);
    cache.set_data(&persons::detail("1"), 1_i64);
    cache.set_data(&persons::documents("1"), vec![10_i64]);
    cache.set_data(&persons::contacts("1"), vec![11_i64]);
    cache.set_data(&persons::documents("2"), vec![20_i64]);

    assert_eq!(cache.remove(&persons::detail("1")), 3);

    assert!(cache.get::<Vec<i64>>(&persons::all()).is_some());
    assert!(cache.get::<Vec<i64>>(&persons::documents("2")).is_some());
    assert!(cache.get::<Vec<i64>>(&persons::contacts("1")).is_none());
    assert_eq!(cache.len(), 2);
}
