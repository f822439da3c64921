use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::QueryStore;
use crate::domain::{DomainError, GeneratedQueryRecord};

/// Process-wide latest-result slot. Lost on restart.
pub struct InMemoryQueryStore {
    latest: RwLock<Option<GeneratedQueryRecord>>,
}

impl InMemoryQueryStore {
    pub fn new() -> Self {
        Self {
            latest: RwLock::new(None),
        }
    }
}

impl Default for InMemoryQueryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryStore for InMemoryQueryStore {
    async fn save(&self, record: GeneratedQueryRecord) -> Result<(), DomainError> {
        *self.latest.write().await = Some(record);
        Ok(())
    }

    async fn latest(&self) -> Result<Option<GeneratedQueryRecord>, DomainError> {
        Ok(self.latest.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_until_first_save() {
        let store = InMemoryQueryStore::new();
        assert!(store.latest().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_previous_record() {
        let store = InMemoryQueryStore::new();
        store
            .save(GeneratedQueryRecord::new("s", "first", "SELECT 1"))
            .await
            .unwrap();
        store
            .save(GeneratedQueryRecord::new("s", "second", "SELECT 2"))
            .await
            .unwrap();

        let latest = store.latest().await.unwrap().unwrap();
        assert_eq!(latest.condition(), "second");
        assert_eq!(latest.sql_query(), "SELECT 2");
    }
}
