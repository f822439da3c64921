use std::sync::Arc;

use crate::application::QueryStore;
use crate::domain::{DomainError, GeneratedQueryRecord};

pub struct LatestQueryUseCase {
    store: Arc<dyn QueryStore>,
}

impl LatestQueryUseCase {
    pub fn new(store: Arc<dyn QueryStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Option<GeneratedQueryRecord>, DomainError> {
        self.store.latest().await
    }

    /// Like [`Self::execute`] but treats an empty slot as `NotFound`.
    pub async fn require(&self) -> Result<GeneratedQueryRecord, DomainError> {
        self.execute()
            .await?
            .ok_or_else(|| DomainError::not_found("No SQL query has been generated yet"))
    }
}
