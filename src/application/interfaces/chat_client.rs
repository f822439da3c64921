use async_trait::async_trait;

use crate::domain::{CompletionRequest, Credential, DomainError};

/// An interface for sending chat-style prompts to a hosted model and receiving
/// the text of the first completion.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details so the generation use case stays provider-agnostic.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError>;
}

/// Builds a client bound to one caller-supplied credential.
///
/// The returned client lives for a single generation and is dropped
/// afterwards; the factory itself is shared for the whole process.
pub trait ChatClientFactory: Send + Sync {
    fn client(&self, credential: &Credential) -> Box<dyn ChatClient>;
}
