use serde::Deserialize;
use workload_core_types::Sensitive;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the chat-completion service
///
/// With no `api_key` the assistant is disabled. `temperature` is sent only
/// when set; otherwise the service default applies.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub api_key: Option<Sensitive<String>>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: Option<f32>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            temperature: None,
        }
    }
}

impl AssistantConfig {
    /// A key that is present and not blank
    pub fn api_key(&self) -> Option<&Sensitive<String>> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose().trim().is_empty())
    }
}
