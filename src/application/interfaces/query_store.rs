use async_trait::async_trait;

use crate::domain::{DomainError, GeneratedQueryRecord};

/// Single-slot holder for the most recently generated query.
#[async_trait]
pub trait QueryStore: Send + Sync {
    /// Replace the held record. Last writer wins.
    async fn save(&self, record: GeneratedQueryRecord) -> Result<(), DomainError>;

    async fn latest(&self) -> Result<Option<GeneratedQueryRecord>, DomainError>;
}
