//! Generate recipe checklists from free-text food ideas.
//!
//! A food idea goes to an LLM provider with a prompt that pins the
//! response shape (ingredients, a `---` delimiter line, steps); the
//! [`parser`] module turns the loosely-structured response into clean
//! item lines and the [`generator`] wraps them into a checkable
//! [`Recipe`].

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod providers;

pub use config::{AiConfig, ProviderConfig};
pub use error::GenerateError;
pub use generator::RecipeGenerator;
pub use model::{Recipe, RecipeItem};

/// Generate a recipe using the default provider from configuration.
pub async fn generate_recipe(idea: &str) -> Result<Recipe, GenerateError> {
    let config = AiConfig::load()?;
    let generator = RecipeGenerator::from_config(&config, None)?;
    generator.generate(idea).await
}

/// Generate a recipe using a specific configured provider.
pub async fn generate_recipe_with_provider(
    idea: &str,
    provider_name: &str,
) -> Result<Recipe, GenerateError> {
    let config = AiConfig::load()?;
    let generator = RecipeGenerator::from_config(&config, Some(provider_name))?;
    generator.generate(idea).await
}
