use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    /// The API base URL handed to a transport is not an absolute URL.
    #[error("Invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    /// The HTTP client backing the native transport could not be built.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}
