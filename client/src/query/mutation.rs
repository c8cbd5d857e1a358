//! Mutation runner: perform a write, then invalidate what it affects.

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;

use std::future::Future;

use super::cache::QueryCache;
use super::key::QueryKey;
use crate::net::error::ApiError;

/// Await `op`; on success invalidate every key in `invalidates`.
///
/// Failures are returned untouched and nothing is invalidated.
///
/// # Errors
///
/// Whatever `op` fails with.
pub async fn run_mutation<T, Fut>(cache: &QueryCache, invalidates: &[QueryKey], op: Fut) -> Result<T, ApiError>
where
    Fut: Future<Output = Result<T, ApiError>>,
{
    let value = op.await?;
    for key in invalidates {
        cache.invalidate(key);
    }
    Ok(value)
}
