//! The seam between advisory calls and whatever produces the text

use crate::errors::AssistantError;

/// One prompt in, one completion out
pub trait TextGenerator: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, AssistantError>;

    /// Provider name for logs
    fn name(&self) -> &str;
}
