use super::*;
use futures::executor::block_on;

#[test]
fn success_invalidates_listed_keys() {
    let cache = QueryCache::with_clock(super::super::CacheConfig::default(), || 0);
    let persons = QueryKey::root("persons");
    let docs = QueryKey::root("docs");
    cache.set_data(&persons, 1_u8);
    cache.set_data(&docs, 1_u8);

    let out = block_on(run_mutation(&cache, &[persons.clone()], async { Ok::<_, ApiError>("created") }));

    assert_eq!(out.unwrap(), "created");
    assert!(cache.is_stale(&persons));
    assert!(!cache.is_stale(&docs));
}

#[test]
fn failure_leaves_cache_untouched() {
    let cache = QueryCache::with_clock(super::super::CacheConfig::default(), || 0);
    let persons = QueryKey::root("persons");
    cache.set_data(&persons, 1_u8);

    let out = block_on(run_mutation::<(), _>(&cache, &[persons.clone()], async {
        Err(ApiError::Rejected("invalid".to_owned()))
    }));

    assert_eq!(out.unwrap_err(), ApiError::Rejected("invalid".to_owned()));
    assert!(!cache.is_stale(&persons));
}
