use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::application::{ChatClientFactory, CompletionCache, QueryStore};
use crate::connector::adapter::{
    HuggingFaceClientFactory, InMemoryQueryStore, LruCompletionCache, MockChatClientFactory,
    DEFAULT_BASE_URL, DEFAULT_CACHE_CAPACITY,
};
use crate::domain::{
    default_schema, PromptBuilder, QueryTarget, SqlDialect, DEFAULT_DATASET_ID, DEFAULT_PROJECT_ID,
};
use crate::{
    GenerateQueryUseCase, GenerationSettings, LatestQueryUseCase, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL,
};

pub struct ContainerConfig {
    pub model: String,
    pub base_url: String,
    pub dialect: SqlDialect,
    pub project_id: String,
    pub dataset_id: String,
    pub max_tokens: u32,
    pub throttle_ms: u64,
    pub cache_capacity: usize,
    /// Fall back to the built-in table schema when a request omits one.
    ///
    /// When `false`, every request must carry its own schema.
    pub use_default_schema: bool,
    pub mock_inference: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            dialect: SqlDialect::default(),
            project_id: DEFAULT_PROJECT_ID.to_string(),
            dataset_id: DEFAULT_DATASET_ID.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            throttle_ms: 2000,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            use_default_schema: true,
            mock_inference: false,
        }
    }
}

/// Process-wide wiring. The cache and the latest-result store live here so
/// every use case built from the container shares them.
pub struct Container {
    clients: Arc<dyn ChatClientFactory>,
    cache: Arc<dyn CompletionCache>,
    store: Arc<dyn QueryStore>,
    prompt_builder: PromptBuilder,
    default_schema: Option<String>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let clients: Arc<dyn ChatClientFactory> = if config.mock_inference {
            debug!("Using mock inference client");
            Arc::new(MockChatClientFactory::new())
        } else {
            debug!("Using hosted inference at {}", config.base_url);
            Arc::new(HuggingFaceClientFactory::new(config.base_url.clone()))
        };

        Self::with_chat_clients(config, clients)
    }

    /// Build the container around an externally supplied client factory.
    pub fn with_chat_clients(
        config: ContainerConfig,
        clients: Arc<dyn ChatClientFactory>,
    ) -> Result<Self> {
        let target = QueryTarget::new(config.project_id.clone(), config.dataset_id.clone());
        let default_schema = config.use_default_schema.then(|| default_schema(&target));
        let prompt_builder = PromptBuilder::new(config.dialect, target);

        let cache = Arc::new(LruCompletionCache::new(config.cache_capacity)?);
        let store = Arc::new(InMemoryQueryStore::new());

        Ok(Self {
            clients,
            cache,
            store,
            prompt_builder,
            default_schema,
            config,
        })
    }

    pub fn generate_use_case(&self) -> GenerateQueryUseCase {
        GenerateQueryUseCase::new(
            self.clients.clone(),
            self.cache.clone(),
            self.store.clone(),
            self.prompt_builder.clone(),
        )
        .with_settings(GenerationSettings {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            throttle: Duration::from_millis(self.config.throttle_ms),
        })
        .with_default_schema(self.default_schema.clone())
    }

    pub fn latest_use_case(&self) -> LatestQueryUseCase {
        LatestQueryUseCase::new(self.store.clone())
    }

    pub fn default_schema(&self) -> Option<&str> {
        self.default_schema.as_deref()
    }
}
