use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One chat-completion call. Built per request and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub system_message: Option<String>,
    pub user_prompt: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionResult {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Wire body for `POST /chat/completions`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionBody {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl From<&CompletionRequest> for ChatCompletionBody {
    fn from(request: &CompletionRequest) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system_message {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: request.user_prompt.clone(),
        });

        Self {
            model: request.model.clone(),
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

/// First choice's message content from a chat-completions reply.
///
/// Any shape mismatch (missing `choices`, `null`, non-string content) or empty
/// content yields `None`.
pub fn first_choice_content(reply: &Value) -> Option<String> {
    reply["choices"][0]["message"]["content"]
        .as_str()
        .filter(|content| !content.is_empty())
        .map(str::to_string)
}
