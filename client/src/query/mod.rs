//! Request cache and the hooks that bind it to Leptos signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never call services directly: they read through [`hooks::use_query`]
//! and write through [`hooks::use_mutation`]. The cache keys every result by a
//! hierarchical [`key::QueryKey`] so a mutation can invalidate a whole subtree
//! (a person's documents, every file listing, ...) in one call.

pub mod cache;
pub mod hooks;
pub mod key;
pub mod keys;
pub mod mutation;

pub use cache::{CacheConfig, CacheEvent, QueryCache, QueryState, QueryStatus, SubscriptionId};
pub use key::{KeyPart, QueryKey};
