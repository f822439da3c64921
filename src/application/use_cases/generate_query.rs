use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::application::{ChatClientFactory, CompletionCache, QueryStore};
use crate::domain::{
    CompletionRequest, Credential, DomainError, GeneratedQueryRecord, GenerationRequest,
    PromptBuilder,
};

pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.3";
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_THROTTLE: Duration = Duration::from_secs(2);

/// Prefix of the text returned in place of a query when the model call fails.
pub const GENERATION_ERROR_PREFIX: &str = "Error generating SQL";

/// Model parameters and pacing for outbound calls.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub max_tokens: u32,
    /// Wait after every successful model call.
    pub throttle: Duration,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            throttle: DEFAULT_THROTTLE,
        }
    }
}

/// Turns a schema and condition into SQL text via the hosted model.
///
/// Outbound failures never surface as `Err`: they come back as an
/// `Error generating SQL: ...` string in the record, exactly like a normal
/// result. Only missing inputs are rejected, and those before any call.
pub struct GenerateQueryUseCase {
    clients: Arc<dyn ChatClientFactory>,
    cache: Arc<dyn CompletionCache>,
    store: Arc<dyn QueryStore>,
    prompt_builder: PromptBuilder,
    settings: GenerationSettings,
    default_schema: Option<String>,
}

impl GenerateQueryUseCase {
    pub fn new(
        clients: Arc<dyn ChatClientFactory>,
        cache: Arc<dyn CompletionCache>,
        store: Arc<dyn QueryStore>,
        prompt_builder: PromptBuilder,
    ) -> Self {
        Self {
            clients,
            cache,
            store,
            prompt_builder,
            settings: GenerationSettings::default(),
            default_schema: None,
        }
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Schema used when a request does not carry one.
    pub fn with_default_schema(mut self, schema: Option<String>) -> Self {
        self.default_schema = schema;
        self
    }

    pub fn prompt_builder(&self) -> &PromptBuilder {
        &self.prompt_builder
    }

    pub async fn execute(
        &self,
        request: GenerationRequest,
    ) -> Result<GeneratedQueryRecord, DomainError> {
        let resolved = request.resolve(self.default_schema.as_deref())?;

        let cached = self.cache.get(&resolved.schema, &resolved.condition).await;
        let record = match cached {
            Some(sql) => {
                debug!("Completion cache hit for condition: {}", resolved.condition);
                GeneratedQueryRecord::new(resolved.schema, resolved.condition, sql)
                    .with_cached(true)
            }
            None => {
                let prompt = self.prompt_builder.build(&resolved.schema, &resolved.condition);
                let sql = match self.invoke(&resolved.credential, prompt).await {
                    Ok(sql) => sql,
                    Err(e) => {
                        warn!("Query generation failed: {e}");
                        format!("{GENERATION_ERROR_PREFIX}: {e}")
                    }
                };
                // Error text is memoized like any other result.
                self.cache
                    .put(&resolved.schema, &resolved.condition, sql.clone())
                    .await;
                GeneratedQueryRecord::new(resolved.schema, resolved.condition, sql)
            }
        };

        self.store.save(record.clone()).await?;

        Ok(record)
    }

    /// Build just the prompt for a request, without calling the model.
    pub fn preview(&self, request: GenerationRequest) -> Result<String, DomainError> {
        let inputs = request.prompt_inputs(self.default_schema.as_deref())?;
        Ok(self.prompt_builder.build(&inputs.schema, &inputs.condition))
    }

    async fn invoke(&self, credential: &Credential, prompt: String) -> Result<String, DomainError> {
        debug!("Sending prompt ({} chars) to {}", prompt.len(), self.settings.model);

        let request =
            CompletionRequest::from_prompt(&self.settings.model, prompt, self.settings.max_tokens);

        let start_time = Instant::now();
        let completion = {
            let client = self.clients.client(credential);
            client.complete(&request).await?
        };
        info!("Model responded in {:?}", start_time.elapsed());

        if !self.settings.throttle.is_zero() {
            tokio::time::sleep(self.settings.throttle).await;
        }

        Ok(completion.trim().to_string())
    }
}
