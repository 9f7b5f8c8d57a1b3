use dioxus_logger::tracing;
use url::Url;

use crate::{
    client::{
        config::ClientConfig,
        error::{ConfigError, SubmitError},
        transport::ApiTransport,
    },
    model::{api::ApiResponseDto, form::FormSubmission},
};

/// `reqwest` transport posting to an absolute base URL
#[derive(Debug, Clone)]
pub struct NativeTransport {
    base_url: Url,
    client: reqwest::Client,
}

impl NativeTransport {
    /// Build a transport for the configured API base URL
    ///
    /// The client keeps cookies so the session created by a successful login is sent
    /// with later requests.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        Self::new(&config.api_base_url)
    }

    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { base_url, client })
    }
}

impl ApiTransport for NativeTransport {
    async fn post_json(
        &self,
        path: &str,
        form: &FormSubmission,
    ) -> Result<ApiResponseDto, SubmitError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| SubmitError::Transport(format!("Invalid endpoint {}: {}", path, e)))?;

        let response = self
            .client
            .post(url)
            .json(form)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();

        response.json::<ApiResponseDto>().await.map_err(|e| {
            tracing::debug!(endpoint = %path, status = %status, "Response body is not valid JSON");

            SubmitError::Parse(e.to_string())
        })
    }
}
