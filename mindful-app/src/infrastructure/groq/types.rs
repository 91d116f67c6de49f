use serde::{Deserialize, Serialize};

use super::prompt::build_chat_messages;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(super) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(super) struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Choice {
    pub message: MessageContent,
}

#[derive(Debug, Deserialize)]
pub(super) struct MessageContent {
    #[serde(default)]
    pub content: Option<String>,
}

/// OpenAI-style error body: `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorDetail {
    pub message: String,
}

impl ChatCompletionRequest {
    pub fn new(model: &str, temperature: f32, user_message: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: build_chat_messages(user_message),
            temperature,
        }
    }
}

impl Message {
    pub fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}
