use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::CompletionRequest,
    services::{
        completion_client::CompletionClient,
        prompt_builder::{self, PromptKind},
    },
};

/// Model settings applied to every completion call.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub system_message: Option<String>,
}

impl From<&Config> for ModelSettings {
    fn from(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            system_message: config.system_message.clone(),
        }
    }
}

pub struct StudyService {
    client: Arc<dyn CompletionClient>,
    settings: ModelSettings,
}

impl StudyService {
    pub fn new(client: Arc<dyn CompletionClient>, settings: ModelSettings) -> Self {
        Self { client, settings }
    }

    pub async fn explain(&self, topic: &str, level: Option<&str>) -> AppResult<String> {
        self.run(PromptKind::Explain, prompt_builder::explain_prompt(topic, level))
            .await
    }

    pub async fn summarize(&self, notes: &str, max_points: Option<u32>) -> AppResult<String> {
        self.run(
            PromptKind::Summarize,
            prompt_builder::summarize_prompt(notes, max_points),
        )
        .await
    }

    /// Returns the raw quiz text; parsing is left to the caller.
    pub async fn quiz(&self, source: &str, count: Option<u32>) -> AppResult<String> {
        self.run(PromptKind::Quiz, prompt_builder::quiz_prompt(source, count))
            .await
    }

    async fn run(&self, kind: PromptKind, user_prompt: String) -> AppResult<String> {
        let request = CompletionRequest {
            system_message: self.settings.system_message.clone(),
            user_prompt,
            model: self.settings.model.clone(),
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        let result = self.client.complete(request).await.map_err(|e| {
            log::error!("{} request failed: {}", kind.as_str(), e);
            e
        })?;

        log::info!(
            "{} request completed ({} chars)",
            kind.as_str(),
            result.text.len()
        );
        Ok(result.text)
    }
}
