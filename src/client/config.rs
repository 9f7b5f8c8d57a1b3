use std::time::Duration;

use url::Url;

use crate::client::error::ConfigError;

pub const API_BASE_URL_VAR: &str = "VEILLE_API_BASE_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "VEILLE_REQUEST_TIMEOUT_MS";

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;

/// Idle and in-flight labels of a submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLabels {
    pub idle: String,
    pub pending: String,
}

impl ButtonLabels {
    pub fn new(idle: impl Into<String>, pending: impl Into<String>) -> Self {
        Self {
            idle: idle.into(),
            pending: pending.into(),
        }
    }
}

/// Configuration for the login page client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin the native transport sends requests to.
    ///
    /// The browser transport resolves endpoints against the page origin and ignores it, so
    /// the web bundle has to be served by the API origin itself.
    pub api_base_url: String,

    pub login_endpoint: String,
    pub contact_endpoint: String,

    /// Maximum time a submission may wait for a response (milliseconds).
    ///
    /// When exceeded the submission fails like any other transport error and the submit
    /// button is enabled again.
    pub request_timeout_ms: u64,

    /// Text shown for transport, parse, and timeout failures.
    pub generic_error: String,

    pub login_labels: ButtonLabels,
    pub contact_labels: ButtonLabels,
}

impl ClientConfig {
    /// Load the configuration from the process environment
    ///
    /// Unset variables keep their defaults. In the browser the environment is always
    /// empty, so this returns the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(API_BASE_URL_VAR) {
            Url::parse(&base_url).map_err(|e| ConfigError::InvalidEnvValue {
                var: API_BASE_URL_VAR.to_string(),
                reason: e.to_string(),
            })?;
            config.api_base_url = base_url;
        }

        if let Some(timeout) = lookup(REQUEST_TIMEOUT_VAR) {
            let timeout_ms: u64 = timeout.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: REQUEST_TIMEOUT_VAR.to_string(),
                reason: format!("expected a number of milliseconds, got {:?}", timeout),
            })?;

            if timeout_ms == 0 {
                return Err(ConfigError::InvalidEnvValue {
                    var: REQUEST_TIMEOUT_VAR.to_string(),
                    reason: "timeout must be greater than zero".to_string(),
                });
            }

            config.request_timeout_ms = timeout_ms;
        }

        Ok(config)
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            login_endpoint: "/api/login".to_string(),
            contact_endpoint: "/api/contact_admin".to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            generic_error: "Error".to_string(),
            login_labels: ButtonLabels::new("Se connecter", "..."),
            contact_labels: ButtonLabels::new("Send", "Sending..."),
        }
    }
}
