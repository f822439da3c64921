pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, ChatClientFactory, CompletionCache, GenerateQueryUseCase, GenerationSettings,
    LatestQueryUseCase, QueryStore, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_THROTTLE,
    GENERATION_ERROR_PREFIX,
};

pub use cli::Commands;

pub use connector::{
    HuggingFaceChatClient, HuggingFaceClientFactory, InMemoryQueryStore, LruCompletionCache,
    MockChatClientFactory,
};

pub use domain::{
    default_schema, ChatMessage, ChatRole, CompletionRequest, Credential, DomainError,
    GeneratedQueryRecord, GenerationRequest, PromptBuilder, QueryTarget, SqlDialect,
};
