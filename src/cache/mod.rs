//! Cache layer
//!
//! In-process caching for backend list reads. The backend client uses this
//! to honor the revalidation window: within the window a repeated read for
//! the same resource is served from here instead of issuing a new request.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

pub use memory::MemoryCache;

/// Cache layer trait
///
/// Note: the generic methods make this trait unusable as a trait object;
/// callers hold the concrete `MemoryCache`.
#[async_trait]
pub trait CacheLayer: Send + Sync {
    /// Get a value from cache
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>>;

    /// Set a value in cache with TTL
    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T, ttl: Duration) -> Result<()>;

    /// Delete a value from cache
    async fn delete(&self, key: &str) -> Result<()>;

    /// Clear all cache entries
    async fn clear(&self) -> Result<()>;
}
