use thiserror::Error;

/// Errors that can occur while generating a recipe
#[derive(Error, Debug)]
pub enum GenerateError {
    /// HTTP request to the model provider failed
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider returned an unusable response
    #[error("Provider error: {0}")]
    Provider(String),

    /// The model produced no parseable recipe lines, even after a retry
    #[error("Model returned no usable recipe lines")]
    EmptyResponse,

    /// Requested provider name is not known
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Requested provider exists but is disabled in configuration
    #[error("Provider '{0}' is not enabled in configuration")]
    ProviderDisabled(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
