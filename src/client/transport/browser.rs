use dioxus_logger::tracing;
use reqwasm::http::{Request, RequestCredentials};

use crate::{
    client::{
        config::ClientConfig,
        error::{ConfigError, SubmitError},
        transport::ApiTransport,
    },
    model::{api::ApiResponseDto, form::FormSubmission},
};

/// `fetch` transport resolving endpoints against the page origin
///
/// `api_base_url` is not used in the browser: the bundle must be served from the same
/// origin as the portal API (or behind a proxy forwarding `/api` to it), otherwise every
/// submission fails with a transport error.
#[derive(Debug, Clone, Default)]
pub struct BrowserTransport;

impl BrowserTransport {
    pub fn from_config(_config: &ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self)
    }
}

impl ApiTransport for BrowserTransport {
    async fn post_json(
        &self,
        path: &str,
        form: &FormSubmission,
    ) -> Result<ApiResponseDto, SubmitError> {
        let body = serde_json::to_string(form)
            .map_err(|e| SubmitError::Transport(format!("Failed to encode form: {}", e)))?;

        let response = Request::post(path)
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
            .body(body)
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
