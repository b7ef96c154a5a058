use crate::config::AiConfig;
use crate::error::GenerateError;
use crate::model::Recipe;
use crate::parser;
use crate::providers::{stricter_safety_prompt, LlmProvider, ProviderFactory, RECIPE_PROMPT};
use log::{debug, info, warn};

/// Drives an LLM provider and parses its response into a [`Recipe`].
///
/// A response that yields no parseable lines at all (usually a refusal
/// or pure filler text) triggers a single automatic retry with a
/// stricter safety prompt before giving up.
pub struct RecipeGenerator {
    provider: Box<dyn LlmProvider>,
}

impl RecipeGenerator {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        RecipeGenerator { provider }
    }

    /// Create a generator from configuration. With `provider_name` unset
    /// the configured default provider is used.
    pub fn from_config(
        config: &AiConfig,
        provider_name: Option<&str>,
    ) -> Result<Self, GenerateError> {
        let name = provider_name.unwrap_or(&config.default_provider);
        let provider_config = config
            .providers
            .get(name)
            .ok_or_else(|| GenerateError::UnknownProvider(name.to_string()))?;

        if !provider_config.enabled {
            return Err(GenerateError::ProviderDisabled(name.to_string()));
        }

        let provider = ProviderFactory::create(name, provider_config)
            .map_err(|e| GenerateError::Provider(e.to_string()))?;

        Ok(RecipeGenerator::new(provider))
    }

    /// Generate a recipe checklist for a free-text food idea.
    pub async fn generate(&self, idea: &str) -> Result<Recipe, GenerateError> {
        info!(
            "Generating recipe for {:?} with {}",
            idea,
            self.provider.provider_name()
        );

        let recipe = self.request(idea, RECIPE_PROMPT).await?;
        if !recipe.is_empty() {
            return Ok(recipe);
        }

        warn!("Response contained no recipe lines, retrying with stricter prompt");
        let recipe = self.request(idea, &stricter_safety_prompt()).await?;
        if recipe.is_empty() {
            return Err(GenerateError::EmptyResponse);
        }
        Ok(recipe)
    }

    async fn request(&self, idea: &str, instructions: &str) -> Result<Recipe, GenerateError> {
        let text = self
            .provider
            .complete(instructions, idea)
            .await
            .map_err(|e| match e.downcast::<reqwest::Error>() {
                Ok(request_error) => GenerateError::Request(*request_error),
                Err(other) => GenerateError::Provider(other.to_string()),
            })?;

        debug!("Raw model response: {} bytes", text.len());

        let (ingredients, steps) = parser::split_sections(&text);
        Ok(Recipe::from_lines(ingredients, steps))
    }
}
