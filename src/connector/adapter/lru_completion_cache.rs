use std::num::NonZeroUsize;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;

use crate::application::CompletionCache;
use crate::domain::DomainError;

pub const DEFAULT_CACHE_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    schema: String,
    condition: String,
}

impl CacheKey {
    fn new(schema: &str, condition: &str) -> Self {
        Self {
            schema: schema.to_string(),
            condition: condition.to_string(),
        }
    }
}

/// In-process completion memo backed by [`lru::LruCache`].
///
/// All access goes through one async mutex, so concurrent requests never
/// mutate the recency list at the same time.
pub struct LruCompletionCache {
    entries: Mutex<LruCache<CacheKey, String>>,
    capacity: NonZeroUsize,
}

impl LruCompletionCache {
    pub fn new(capacity: usize) -> Result<Self, DomainError> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or_else(|| DomainError::invalid_input("cache capacity must be at least 1"))?;
        Ok(Self {
            entries: Mutex::new(LruCache::new(capacity)),
            capacity,
        })
    }
}

impl Default for LruCompletionCache {
    fn default() -> Self {
        let capacity = NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            capacity,
        }
    }
}

#[async_trait]
impl CompletionCache for LruCompletionCache {
    async fn get(&self, schema: &str, condition: &str) -> Option<String> {
        let mut entries = self.entries.lock().await;
        entries.get(&CacheKey::new(schema, condition)).cloned()
    }

    async fn put(&self, schema: &str, condition: &str, completion: String) {
        let mut entries = self.entries.lock().await;
        entries.put(CacheKey::new(schema, condition), completion);
    }

    async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    fn capacity(&self) -> usize {
        self.capacity.get()
    }
}
