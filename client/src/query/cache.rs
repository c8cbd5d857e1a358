//! Single-threaded query cache.
//!
//! DESIGN
//! ======
//! Results are stored type-erased (`Rc<dyn Any>`) under a [`QueryKey`] and
//! downcast on read, so one cache serves every service. A fetch for a key that
//! is already in flight awaits the same shared future instead of issuing a
//! second request. Writes land when the shared future completes, exactly once,
//! and listeners subscribed to the key are told about it afterwards.
//!
//! Staleness is time based (`stale_ms`) plus an explicit `invalidated` flag set
//! by mutations. Invalidating a key whose fetch is still running marks the
//! result stale on arrival so observers refetch once more.
//!
//! No `RefCell` borrow is held across an `.await` or while listeners run.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::any::Any;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use super::key::QueryKey;
use crate::net::error::ApiError;

type Erased = Rc<dyn Any>;
type InFlight = Shared<LocalBoxFuture<'static, Result<Erased, ApiError>>>;

/// Callback run after a cached key changes.
pub type Listener = Rc<dyn Fn(&QueryKey, CacheEvent)>;

/// Millisecond clock.
pub type Clock = Rc<dyn Fn() -> i64>;

/// Freshness and retention windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Data younger than this is served without refetching.
    pub stale_ms: i64,
    /// Unobserved entries older than this are dropped by [`QueryCache::gc`].
    pub cache_ms: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { stale_ms: 30_000, cache_ms: 300_000 }
    }
}

/// What happened to a key, as told to listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheEvent {
    /// New data or a new error landed.
    Updated,
    /// Data is stale and should be refetched by whoever shows it.
    Invalidated,
    /// The entry was dropped.
    Removed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never fetched.
    Idle,
    /// First fetch running, nothing to show yet.
    Loading,
    /// Data available (possibly stale, possibly refetching).
    Success,
    /// Last fetch failed and there is no earlier data.
    Error,
}

/// Snapshot of one entry's bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState {
    pub status: QueryStatus,
    pub updated_at: Option<i64>,
    pub is_stale: bool,
    pub is_fetching: bool,
    pub error: Option<ApiError>,
}

#[derive(Default)]
struct Entry {
    data: Option<Erased>,
    error: Option<ApiError>,
    updated_at: Option<i64>,
    invalidated: bool,
    stale_on_arrival: bool,
}

struct Inner {
    config: CacheConfig,
    clock: Clock,
    entries: BTreeMap<QueryKey, Entry>,
    inflight: HashMap<QueryKey, (u64, InFlight)>,
    listeners: BTreeMap<SubscriptionId, (QueryKey, Listener)>,
    next_id: u64,
}

impl Inner {
    fn now(&self) -> i64 {
        (self.clock)()
    }

    fn is_fresh(&self, entry: &Entry) -> bool {
        entry.data.is_some()
            && !entry.invalidated
            && entry
                .updated_at
                .is_some_and(|at| self.now().saturating_sub(at) < self.config.stale_ms)
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared handle; clones refer to the same cache.
#[derive(Clone)]
pub struct QueryCache {
    inner: Rc<RefCell<Inner>>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl QueryCache {
    /// Cache on the wall clock.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, crate::util::time::now_ms)
    }

    #[must_use]
    pub fn with_clock(config: CacheConfig, clock: impl Fn() -> i64 + 'static) -> Self {
        let inner = Inner {
            config,
            clock: Rc::new(clock),
            entries: BTreeMap::new(),
            inflight: HashMap::new(),
            listeners: BTreeMap::new(),
            next_id: 0,
        };
        Self { inner: Rc::new(RefCell::new(inner)) }
    }

    #[must_use]
    pub fn config(&self) -> CacheConfig {
        self.inner.borrow().config
    }

    /// Return fresh cached data, join an in-flight request, or start one.
    ///
    /// `fetcher` is only called when a new request is needed. A failed fetch
    /// keeps whatever data the entry already had.
    ///
    /// # Errors
    ///
    /// The fetch error, or [`ApiError::Decode`] if the key already holds a
    /// value of another type.
    pub async fn fetch<T, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<Rc<T>, ApiError>
    where
        T: 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        if let Some(data) = self.fresh_data(key) {
            return downcast(key, data);
        }
        let pending = match self.in_flight(key) {
            Some(pending) => pending,
            None => self.start(key, fetcher()),
        };
        downcast(key, pending.await?)
    }

    /// Cached data regardless of staleness.
    #[must_use]
    pub fn get<T: 'static>(&self, key: &QueryKey) -> Option<Rc<T>> {
        let data = self.inner.borrow().entries.get(key)?.data.clone()?;
        data.downcast::<T>().ok()
    }

    #[must_use]
    pub fn state(&self, key: &QueryKey) -> QueryState {
        let inner = self.inner.borrow();
        let is_fetching = inner.inflight.contains_key(key);
        let Some(entry) = inner.entries.get(key) else {
            return QueryState {
                status: if is_fetching { QueryStatus::Loading } else { QueryStatus::Idle },
                updated_at: None,
                is_stale: true,
                is_fetching,
                error: None,
            };
        };
        let status = match (&entry.data, &entry.error) {
            (Some(_), _) => QueryStatus::Success,
            (None, Some(_)) => QueryStatus::Error,
            (None, None) if is_fetching => QueryStatus::Loading,
            (None, None) => QueryStatus::Idle,
        };
        QueryState {
            status,
            updated_at: entry.updated_at,
            is_stale: !inner.is_fresh(entry),
            is_fetching,
            error: entry.error.clone(),
        }
    }

    #[must_use]
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.state(key).is_stale
    }

    /// Store `value` as fresh data for `key` (e.g. the body of a create/update
    /// response) and notify the key's listeners.
    pub fn set_data<T: 'static>(&self, key: &QueryKey, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            let now = inner.now();
            let entry = inner.entries.entry(key.clone()).or_default();
            entry.data = Some(Rc::new(value));
            entry.error = None;
            entry.updated_at = Some(now);
            entry.invalidated = false;
        }
        self.notify(|k| k == key, CacheEvent::Updated);
    }

    /// Edit cached data in place. Returns `false` when the key holds no value
    /// of type `T`.
    pub fn update_data<T: Clone + 'static>(&self, key: &QueryKey, edit: impl FnOnce(&mut T)) -> bool {
        let Some(current) = self.get::<T>(key) else {
            return false;
        };
        let mut next = (*current).clone();
        edit(&mut next);
        self.set_data(key, next);
        true
    }

    /// Mark every entry under `prefix` stale and tell listeners under it to
    /// refetch. Returns the number of entries marked.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        let count = {
            let mut inner = self.inner.borrow_mut();
            let fetching: Vec<QueryKey> = inner
                .inflight
                .keys()
                .filter(|k| k.starts_with(prefix))
                .cloned()
                .collect();
            let mut count = 0;
            for (key, entry) in inner.entries.range_mut(prefix.clone()..) {
                if !key.starts_with(prefix) {
                    break;
                }
                entry.invalidated = true;
                if fetching.contains(key) {
                    entry.stale_on_arrival = true;
                }
                count += 1;
            }
            count
        };
        log::debug!("query {prefix}: invalidated {count} entries");
        self.notify(|k| k.starts_with(prefix), CacheEvent::Invalidated);
        count
    }

    /// Drop every entry under `prefix`, abandoning in-flight results for them.
    pub fn remove(&self, prefix: &QueryKey) -> usize {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.entries.len();
            inner.entries.retain(|k, _| !k.starts_with(prefix));
            inner.inflight.retain(|k, _| !k.starts_with(prefix));
            before - inner.entries.len()
        };
        self.notify(|k| k.starts_with(prefix), CacheEvent::Removed);
        removed
    }

    /// Call `listener` whenever `key` changes.
    pub fn subscribe(&self, key: &QueryKey, listener: impl Fn(&QueryKey, CacheEvent) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id());
        inner.listeners.insert(id, (key.clone(), Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.borrow_mut().listeners.remove(&id).is_some()
    }

    /// Drop entries nobody observes whose data is older than `cache_ms`.
    pub fn gc(&self) -> usize {
        let mut inner = self.inner.borrow_mut();
        let now = inner.now();
        let cache_ms = inner.config.cache_ms;
        let observed: Vec<QueryKey> = inner.listeners.values().map(|(k, _)| k.clone()).collect();
        let fetching: Vec<QueryKey> = inner.inflight.keys().cloned().collect();
        let before = inner.entries.len();
        inner.entries.retain(|key, entry| {
            observed.contains(key)
                || fetching.contains(key)
                || entry.updated_at.is_some_and(|at| now.saturating_sub(at) < cache_ms)
        });
        before - inner.entries.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    fn fresh_data(&self, key: &QueryKey) -> Option<Erased> {
        let inner = self.inner.borrow();
        let entry = inner.entries.get(key)?;
        if inner.is_fresh(entry) { entry.data.clone() } else { None }
    }

    fn in_flight(&self, key: &QueryKey) -> Option<InFlight> {
        self.inner.borrow().inflight.get(key).map(|(_, f)| f.clone())
    }

    fn start<T, Fut>(&self, key: &QueryKey, request: Fut) -> InFlight
    where
        T: 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let fetch_id = self.inner.borrow_mut().next_id();
        let cache = self.clone();
        let owned = key.clone();
        let shared = async move {
            let result = request.await.map(|value| Rc::new(value) as Erased);
            cache.complete(&owned, fetch_id, &result);
            result
        }
        .boxed_local()
        .shared();

        let mut inner = self.inner.borrow_mut();
        inner.entries.entry(key.clone()).or_default();
        inner.inflight.insert(key.clone(), (fetch_id, shared.clone()));
        log::debug!("query {key}: fetching");
        shared
    }

    fn complete(&self, key: &QueryKey, fetch_id: u64, result: &Result<Erased, ApiError>) {
        let event = {
            let mut inner = self.inner.borrow_mut();
            if inner.inflight.get(key).map(|(id, _)| *id) != Some(fetch_id) {
                // Removed while in flight.
                return;
            }
            inner.inflight.remove(key);
            let now = inner.now();
            let entry = inner.entries.entry(key.clone()).or_default();
            let stale_on_arrival = std::mem::take(&mut entry.stale_on_arrival);
            match result {
                Ok(data) => {
                    entry.data = Some(data.clone());
                    entry.error = None;
                    entry.updated_at = Some(now);
                    entry.invalidated = stale_on_arrival;
                }
                Err(err) => {
                    log::warn!("query {key}: {err}");
                    entry.error = Some(err.clone());
                }
            }
            if stale_on_arrival && result.is_ok() { CacheEvent::Invalidated } else { CacheEvent::Updated }
        };
        self.notify(|k| k == key, event);
    }

    fn notify(&self, matches: impl Fn(&QueryKey) -> bool, event: CacheEvent) {
        let targets: Vec<(QueryKey, Listener)> = self
            .inner
            .borrow()
            .listeners
            .values()
            .filter(|(k, _)| matches(k))
            .map(|(k, l)| (k.clone(), l.clone()))
            .collect();
        for (key, listener) in targets {
            listener(&key, event);
        }
    }
}

fn downcast<T: 'static>(key: &QueryKey, data: Erased) -> Result<Rc<T>, ApiError> {
    data.downcast::<T>()
        .map_err(|_| ApiError::Decode(format!("cached value for {key} has a different type")))
}
