mod anthropic;
mod factory;
mod ollama;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use ollama::OllamaProvider;
pub use open_ai::OpenAiProvider;
pub use prompt::{stricter_safety_prompt, RECIPE_PROMPT};

use async_trait::async_trait;
use std::error::Error;

/// Unified trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Ask the model for a recipe: `instructions` is the system prompt,
    /// `prompt` is the user's food idea. Returns the raw response text.
    async fn complete(
        &self,
        instructions: &str,
        prompt: &str,
    ) -> Result<String, Box<dyn Error + Send + Sync>>;
}
