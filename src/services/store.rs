use async_trait::async_trait;
use moka::ops::compute::{CompResult, Op};
use thiserror::Error;

/// Errors that can occur when using a key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Computes the next value of a key from its current one; `None` removes the key
pub type UpdateFn = Box<dyn FnOnce(Option<String>) -> Option<String> + Send>;

/// Key-value store used for favorites and dummy sessions
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    async fn contains(&self, key: &str) -> Result<bool, StoreError>;

    /// Remove a key, returning whether it was present
    async fn remove(&self, key: &str) -> Result<bool, StoreError>;

    /// Read-modify-write a key as one step
    ///
    /// Concurrent updates of the same key are applied one after another.
    /// Returns the value stored afterwards.
    async fn update(&self, key: &str, f: UpdateFn) -> Result<Option<String>, StoreError>;
}

/// Process-local store backed by a moka cache
pub struct MemoryStore {
    entries: moka::future::Cache<String, String>,
}

impl MemoryStore {
    pub fn new(max_entries: u64) -> Self {
        Self {
            entries: moka::future::Cache::new(max_entries),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).await)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value).await;
        Ok(())
    }

    async fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.contains_key(key))
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.remove(key).await.is_some())
    }

    async fn update(&self, key: &str, f: UpdateFn) -> Result<Option<String>, StoreError> {
        let result = self
            .entries
            .entry_by_ref(key)
            .and_compute_with(|current| {
                let op = match f(current.map(|entry| entry.into_value())) {
                    Some(value) => Op::Put(value),
                    None => Op::Remove,
                };
                std::future::ready(op)
            })
            .await;

        Ok(match result {
            CompResult::Inserted(entry) | CompResult::ReplacedWith(entry) | CompResult::Unchanged(entry) => {
                Some(entry.into_value())
            }
            CompResult::Removed(_) | CompResult::StillNone(_) => None,
        })
    }
}
