use std::time::Duration;

use mindful_errors::AppError;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use url::Url;

use super::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};
use crate::config::RelayConfig;

const MODEL: &str = "llama-3.3-70b-versatile";
const TEMPERATURE: f32 = 0.0;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_ERROR_DETAIL_CHARS: usize = 500;

pub struct GroqClient {
    http_client: reqwest::Client,
    api_url: Url,
    api_key: Option<String>,
}

impl GroqClient {
    pub fn new(config: &RelayConfig) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Builds the bearer header from the configured key without sending anything.
    pub fn authorization_header(&self) -> Result<HeaderValue, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AppError::Configuration("GROQ_API_KEY is not set".to_string()))?;

        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| AppError::Configuration(format!("GROQ_API_KEY is not a valid header value: {}", e)))
    }

    pub async fn complete(&self, user_message: &str) -> Result<String, AppError> {
        let request = ChatCompletionRequest::new(MODEL, TEMPERATURE, user_message);

        // A missing key still goes out so the provider reports the auth failure.
        let bearer = format!("Bearer {}", self.api_key.as_deref().unwrap_or_default());

        tracing::info!("Sending request to Groq API...");
        let response = self
            .http_client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, bearer)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(describe_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Groq error: {} - {}", status, body);
            return Err(AppError::Upstream(describe_status_error(status, &body)));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("invalid response from Groq API: {}", e)))?;

        let reply = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Upstream("Groq API returned no choices".to_string()))?
            .message
            .content
            .ok_or_else(|| AppError::Upstream("Groq API returned an empty message".to_string()))?;

        tracing::info!(
            "Received response from Groq API: {}...",
            reply.chars().take(50).collect::<String>()
        );
        Ok(reply)
    }
}

fn describe_transport_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Upstream(format!("request to Groq API timed out: {}", err))
    } else {
        AppError::Upstream(err.to_string())
    }
}

fn describe_status_error(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<ApiErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    let detail: String = detail.chars().take(MAX_ERROR_DETAIL_CHARS).collect();

    if detail.is_empty() {
        format!("Groq API returned {}", status)
    } else {
        format!("Groq API returned {}: {}", status, detail)
    }
}
