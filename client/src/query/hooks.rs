//! Leptos bindings for the query cache.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`QueryContext`] (cache + API client). Pages call
//! [`use_query`] to read and [`use_mutation`] to write. Each query handle
//! subscribes to its key: an invalidation triggers a refetch, an update from
//! elsewhere (another handle, `set_data`) is mirrored into its signals.
//!
//! Requests are only issued in the browser; during server rendering handles
//! stay in their loading state and hydrate into real data.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;

use super::cache::{CacheEvent, QueryCache, SubscriptionId};
use super::key::QueryKey;
use super::mutation::run_mutation;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::state::toast::ToastState;
use crate::util::time::now_ms;

/// Cache and client shared by every hook.
#[derive(Clone, Copy)]
pub struct QueryContext {
    cache: StoredValue<QueryCache, LocalStorage>,
    client: StoredValue<ApiClient, LocalStorage>,
}

impl QueryContext {
    /// Store both handles and provide them as context.
    pub fn provide(cache: QueryCache, client: ApiClient) -> Self {
        let ctx = Self { cache: StoredValue::new_local(cache), client: StoredValue::new_local(client) };
        provide_context(ctx);
        ctx
    }

    #[must_use]
    pub fn cache(&self) -> QueryCache {
        self.cache.get_value()
    }

    #[must_use]
    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }
}

/// Delay between cache sweeps.
pub const GC_INTERVAL_MS: u64 = 60_000;

/// Periodically drop cache entries nobody observes any more. Browser only.
pub fn spawn_cache_gc(ctx: QueryContext) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(GC_INTERVAL_MS)).await;
            let dropped = ctx.cache().gc();
            if dropped > 0 {
                log::debug!("query cache: collected {dropped} entries");
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ctx;
    }
}

pub fn use_query_context() -> QueryContext {
    expect_context::<QueryContext>()
}

/// Reactive view of one cached query.
pub struct QueryHandle<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    key: RwSignal<QueryKey>,
    ctx: QueryContext,
}

impl<T: Send + Sync + 'static> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryHandle<T> {}

impl<T: Send + Sync + 'static> QueryHandle<T> {
    /// Force a refetch of this handle's key.
    pub fn refetch(&self) {
        self.ctx.cache().invalidate(&self.key.get_untracked());
    }

    #[must_use]
    pub fn key(&self) -> QueryKey {
        self.key.get_untracked()
    }
}

/// Observe `key_fn()` (re-evaluated reactively) and load it with `fetcher`.
pub fn use_query<T, K, F, Fut>(key_fn: K, fetcher: F) -> QueryHandle<T>
where
    T: Clone + Send + Sync + 'static,
    K: Fn() -> QueryKey + 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let ctx = use_query_context();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let data = RwSignal::new(None::<T>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let current = RwSignal::new(QueryKey::default());
    let fetcher = Rc::new(fetcher);

    let load: Rc<dyn Fn(QueryKey)> = Rc::new(move |key: QueryKey| {
        let cache = ctx.cache();
        data.set(cache.get::<T>(&key).map(|v| (*v).clone()));
        if !cfg!(feature = "hydrate") {
            return;
        }
        loading.set(true);
        let fetcher = fetcher.clone();
        let client = ctx.client();
        leptos::task::spawn_local(async move {
            let result = cache.fetch(&key, move || (*fetcher)(client)).await;
            if current.try_get_untracked().as_ref() != Some(&key) {
                return;
            }
            match result {
                Ok(value) => {
                    data.set(Some((*value).clone()));
                    error.set(None);
                }
                Err(err) => {
                    let message = err.to_string();
                    toasts.update(|t| {
                        t.error(message.clone(), now_ms());
                    });
                    error.set(Some(message));
                }
            }
            loading.set(false);
        });
    });

    let subscription = StoredValue::new_local(None::<SubscriptionId>);
    Effect::new(move |_| {
        let key = key_fn();
        let cache = ctx.cache();
        if let Some(id) = subscription.get_value() {
            cache.unsubscribe(id);
        }
        current.set(key.clone());

        let reload = load.clone();
        let id = cache.subscribe(&key, move |changed, event| match event {
            CacheEvent::Invalidated => reload(changed.clone()),
            CacheEvent::Updated => {
                let cache = ctx.cache();
                if let Some(value) = cache.get::<T>(changed) {
                    data.set(Some((*value).clone()));
                }
                error.set(cache.state(changed).error.map(|e| e.to_string()));
            }
            CacheEvent::Removed => data.set(None),
        });
        subscription.set_value(Some(id));
        load(key);
    });

    on_cleanup(move || {
        if let Some(Some(id)) = subscription.try_get_value() {
            ctx.cache().unsubscribe(id);
        }
    });

    QueryHandle { data, error, loading, key: current, ctx }
}

/// Issues writes and reports their failures as toasts.
#[derive(Clone, Copy)]
pub struct MutationHandle {
    pub pending: RwSignal<bool>,
    ctx: QueryContext,
    toasts: RwSignal<ToastState>,
}

pub fn use_mutation() -> MutationHandle {
    MutationHandle {
        pending: RwSignal::new(false),
        ctx: use_query_context(),
        toasts: expect_context::<RwSignal<ToastState>>(),
    }
}

impl MutationHandle {
    /// Run `op`, invalidate `invalidates` on success, then call `on_success`.
    pub fn run<T, F, Fut, S>(&self, invalidates: Vec<QueryKey>, op: F, on_success: S)
    where
        T: 'static,
        F: FnOnce(ApiClient) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        S: FnOnce(T) + 'static,
    {
        let Self { pending, ctx, toasts } = *self;
        pending.set(true);
        leptos::task::spawn_local(async move {
            let cache = ctx.cache();
            match run_mutation(&cache, &invalidates, op(ctx.client())).await {
                Ok(value) => on_success(value),
                Err(err) => toasts.update(|t| {
                    t.error(err.to_string(), now_ms());
                }),
            }
            let _ = pending.try_set(false);
        });
    }

    /// Show a success toast.
    pub fn notify(&self, message: &str) {
        self.toasts.update(|t| {
            t.success(message, now_ms());
        });
    }

    /// Show an error toast for a problem caught before any request.
    pub fn notify_error(&self, message: &str) {
        self.toasts.update(|t| {
            t.error(message, now_ms());
        });
    }

    /// The shared cache, for edits beyond invalidation.
    #[must_use]
    pub fn cache(&self) -> QueryCache {
        self.ctx.cache()
    }
}
