use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::Config,
    errors::CompletionError,
    models::domain::{
        completion::{first_choice_content, ChatCompletionBody},
        CompletionRequest, CompletionResult,
    },
};

/// A chat-completion backend. One call is one upstream request; nothing is retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResult, CompletionError>;
}

/// Talks to an OpenAI-compatible `/chat/completions` endpoint over HTTP.
pub struct HttpCompletionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
}

impl HttpCompletionClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.completions_url(),
            api_key: config.api_key.clone(),
        }
    }

    #[cfg(test)]
    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResult, CompletionError> {
        let body = ChatCompletionBody::from(&request);
        log::debug!(
            "Sending completion request: model={}, prompt_len={}",
            body.model,
            request.user_prompt.len()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to send request to completion API: {}", e);
                CompletionError::Transport(e.to_string())
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| CompletionError::Transport(format!("failed to read response body: {}", e)))?;

        log::info!("Completion API response status: {}", status);

        if !status.is_success() {
            log::error!("Completion API error: {} {}", status.as_u16(), response_text);
            return Err(CompletionError::Upstream {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let reply = serde_json::from_str::<serde_json::Value>(&response_text).map_err(|e| {
            log::error!("Failed to parse completion API response: {}", e);
            CompletionError::UpstreamParse(e.to_string())
        })?;

        let text = first_choice_content(&reply).ok_or_else(|| {
            log::error!("Completion API reply has no message content");
            CompletionError::EmptyCompletion
        })?;
        Ok(CompletionResult { text })
    }
}
