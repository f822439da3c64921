use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;

use crate::application::{ChatClient, ChatClientFactory};
use crate::domain::{CompletionRequest, Credential, DomainError};

#[derive(Debug, Clone)]
enum MockReply {
    /// Deterministic placeholder derived from the prompt length.
    Placeholder,
    Fixed(String),
    Fail(String),
}

/// Offline stand-in for the hosted model. Counts calls and remembers the last
/// request so callers can inspect what would have been sent.
#[derive(Clone)]
pub struct MockChatClientFactory {
    reply: MockReply,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<CompletionRequest>>>,
    last_credential: Arc<Mutex<Option<Credential>>>,
}

impl MockChatClientFactory {
    pub fn new() -> Self {
        Self::with_reply(MockReply::Placeholder)
    }

    /// Every call returns `text` verbatim (untrimmed).
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Fixed(text.into()))
    }

    /// Every call fails with an inference error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Fail(message.into()))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
            last_credential: Arc::new(Mutex::new(None)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().ok().and_then(|r| r.clone())
    }

    pub fn last_credential(&self) -> Option<Credential> {
        self.last_credential.lock().ok().and_then(|c| c.clone())
    }
}

impl Default for MockChatClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatClientFactory for MockChatClientFactory {
    fn client(&self, credential: &Credential) -> Box<dyn ChatClient> {
        if let Ok(mut slot) = self.last_credential.lock() {
            *slot = Some(credential.clone());
        }
        Box::new(MockChatClient {
            factory: self.clone(),
        })
    }
}

pub struct MockChatClient {
    factory: MockChatClientFactory,
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        self.factory.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut slot) = self.factory.last_request.lock() {
            *slot = Some(request.clone());
        }
        debug!("MockChatClient: completing for model {}", request.model());

        match &self.factory.reply {
            MockReply::Placeholder => {
                let prompt_len = request.prompt().map(str::len).unwrap_or_default();
                Ok(format!(
                    "SELECT 1; -- mock completion for {prompt_len}-char prompt"
                ))
            }
            MockReply::Fixed(text) => Ok(text.clone()),
            MockReply::Fail(message) => Err(DomainError::inference(message.clone())),
        }
    }
}
