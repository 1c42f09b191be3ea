use super::{
    parse::{parse_generation, split_suggestions},
    prompts::{
        GENERATION_SYSTEM_PROMPT, IMPROVEMENT_SYSTEM_PROMPT, build_generation_prompt,
        build_improvement_prompt,
    },
    types::{GenerationOutcome, GenerationRequest, ImprovementRequest, ImprovementResult},
};
use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Sampling parameters sent with every completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f32,
    pub generation_max_tokens: u32,
    pub improvement_max_tokens: u32,
}

impl From<&LlmConfig> for CompletionSettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            generation_max_tokens: config.generation_max_tokens,
            improvement_max_tokens: config.improvement_max_tokens,
        }
    }
}

/// Sends one completion per call and shapes the answer. Never retries.
pub struct CompletionGateway {
    client: Arc<dyn LlmClient>,
    settings: CompletionSettings,
}

impl CompletionGateway {
    pub fn new(client: Arc<dyn LlmClient>, settings: CompletionSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    pub async fn generate_resume(&self, request: &GenerationRequest) -> Result<GenerationOutcome> {
        let prompt = build_generation_prompt(&request.user_info, &request.job_description);
        let raw = self
            .complete(
                GENERATION_SYSTEM_PROMPT,
                prompt,
                self.settings.generation_max_tokens,
            )
            .await?;

        let outcome = parse_generation(&raw);
        if !outcome.is_structured() {
            info!("Completion was not a JSON object, returning raw text");
        }
        Ok(outcome)
    }

    pub async fn suggest_improvements(
        &self,
        request: &ImprovementRequest,
    ) -> Result<ImprovementResult> {
        let prompt = build_improvement_prompt(&request.current_text, &request.section);
        let raw = self
            .complete(
                IMPROVEMENT_SYSTEM_PROMPT,
                prompt,
                self.settings.improvement_max_tokens,
            )
            .await?;

        Ok(split_suggestions(&raw))
    }

    async fn complete(&self, system: &str, prompt: String, max_tokens: u32) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(prompt)],
            max_tokens: Some(max_tokens),
            temperature: Some(self.settings.temperature),
        };

        let response = match self.client.create_chat_completion(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Upstream completion failed: {}", e);
                return Err(e);
            }
        };

        debug!(
            "Completion {} from {} with {} choices",
            response.id,
            response.model,
            response.choices.len()
        );

        match response.first_content() {
            Some(content) => Ok(content.to_string()),
            None => {
                error!("Upstream completion {} returned no choices", response.id);
                Err(Error::llm("completion returned no choices"))
            }
        }
    }
}
