use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use crate::models::{ExploreQuery, GuideSearchQuery};

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// In-memory response cache
///
/// Query results only depend on the request and the dataset, which is loaded
/// once, so a response can be memoized by its request key until the TTL ends.
pub struct CacheManager {
    cache: moka::future::Cache<String, Vec<u8>>,
}

impl CacheManager {
    /// Create a new cache manager
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Get a value from cache
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(bytes) = self.cache.get(key).await {
            tracing::trace!("Cache hit: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }

        tracing::trace!("Cache miss: {}", key);
        Err(CacheError::CacheMiss(key.to_string()))
    }

    /// Set a value in cache
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.cache.insert(key.to_string(), bytes).await;

        tracing::trace!("Cache set: {}", key);
        Ok(())
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for an explore listing
    pub fn explore(query: &ExploreQuery) -> String {
        format!(
            "explore:{}|{}|{}|{}|{}",
            query.q.as_deref().unwrap_or(""),
            query.experience.as_deref().unwrap_or(""),
            query.activity.as_deref().unwrap_or(""),
            query.crowdness.as_deref().unwrap_or(""),
            query.show.as_deref().unwrap_or(""),
        )
    }

    /// Build a cache key for a destination page
    pub fn detail(place: &str) -> String {
        format!("detail:{}", place)
    }

    /// Build a cache key for a guide search
    pub fn guides(query: &GuideSearchQuery) -> String {
        format!("guides:{}", query.q.as_deref().unwrap_or(""))
    }

    /// Build a cache key for top recommendations
    pub fn recommendations(limit: usize) -> String {
        format!("recommendations:{}", limit)
    }
}
