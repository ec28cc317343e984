//! Error types for URL resolution and configuration loading.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ResolutionError>;

/// Errors that can occur while resolving attribute URLs.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    /// The injected resolver returned a URL that does not end with the path
    /// that followed the `~/` marker, so the application path cannot be
    /// separated from the literal remainder.
    #[error(
        "Unexpected return value '{resolved}' from 'UrlResolver.content' for URL '{url}'. \
         If the 'UrlResolver' has been replaced, change 'content' to resolve URLs that start \
         with '~/'. Otherwise disable URL resolution for this element."
    )]
    ContractViolation { url: String, resolved: String },

    /// Configuration was structurally valid but semantically unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON configuration failed to deserialize.
    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration failed to deserialize.
    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
