use async_trait::async_trait;

/// Bounded memo of completions keyed on the exact (schema, condition) pair.
#[async_trait]
pub trait CompletionCache: Send + Sync {
    /// Look up a completion, marking the entry as most recently used.
    async fn get(&self, schema: &str, condition: &str) -> Option<String>;

    /// Store a completion, evicting the least recently used entry when full.
    async fn put(&self, schema: &str, condition: &str, completion: String);

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn capacity(&self) -> usize;
}
