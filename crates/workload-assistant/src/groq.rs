//! Groq chat-completion client
//!
//! Groq serves an OpenAI-compatible API, so this speaks the
//! `/chat/completions` request/response shape with bearer auth.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use workload_core_types::Sensitive;

use crate::config::AssistantConfig;
use crate::errors::AssistantError;
use crate::generator::TextGenerator;

/// Blocking client for one chat-completion endpoint
pub struct GroqClient {
    client: Client,
    api_key: Sensitive<String>,
    model: String,
    base_url: String,
    temperature: Option<f32>,
}

impl GroqClient {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// `NotConfigured` when no API key is set; `Http` when the HTTP client
    /// cannot be built.
    pub fn from_config(config: &AssistantConfig) -> Result<Self, AssistantError> {
        let api_key = config.api_key().cloned().ok_or(AssistantError::NotConfigured)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
        }
    }
}

impl TextGenerator for GroqClient {
    fn complete(&self, prompt: &str) -> Result<String, AssistantError> {
        let request = self.build_request(prompt);

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "chat completion request");

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .json(&request)
            .send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(AssistantError::Api { status, body });
        }

        let response: ChatResponse = response.json()?;
        first_completion(response)
    }

    fn name(&self) -> &str {
        "groq"
    }
}

fn first_completion(response: ChatResponse) -> Result<String, AssistantError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(AssistantError::EmptyResponse)
}

// Request/Response types

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}
