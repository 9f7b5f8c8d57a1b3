//! HTTP transports used to POST form submissions.
//!
//! The browser build talks to the page origin through `reqwasm`; native builds (desktop,
//! tests) use `reqwest` against a configured base URL. Both parse the JSON body whatever
//! the HTTP status is, since the server reports business failures with 4xx/5xx statuses.
//!
//! Every request goes through [`send`], which makes it abortable and bounds it with the
//! configured timeout so a hung request can never leave a form stuck in flight.

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

use std::{future::Future, time::Duration};

use dioxus_logger::tracing;
use futures::future::{self, AbortRegistration, Abortable, Either};

use crate::{
    client::{
        config::ClientConfig,
        error::{Error, SubmitError},
    },
    model::{api::ApiResponseDto, form::FormSubmission},
};

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserTransport as DefaultTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use native::NativeTransport as DefaultTransport;

/// Sends a form submission as JSON and parses the response body
#[allow(async_fn_in_trait)]
pub trait ApiTransport {
    async fn post_json(
        &self,
        path: &str,
        form: &FormSubmission,
    ) -> Result<ApiResponseDto, SubmitError>;
}

/// Client configuration bundled with the platform transport, shared through context
#[derive(Clone)]
pub struct ApiClient {
    pub config: ClientConfig,
    pub transport: DefaultTransport,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = DefaultTransport::from_config(&config)?;

        Ok(Self { config, transport })
    }

    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

/// POST a submission, giving up when aborted or when `timeout` elapses
pub async fn send<T: ApiTransport>(
    transport: &T,
    path: &str,
    form: &FormSubmission,
    timeout: Duration,
    registration: AbortRegistration,
) -> Result<ApiResponseDto, SubmitError> {
    let request = Abortable::new(transport.post_json(path, form), registration);

    match with_timeout(request, timeout).await {
        Ok(Ok(result)) => result,
        Ok(Err(future::Aborted)) => {
            tracing::debug!(endpoint = %path, "Submission cancelled");

            Err(SubmitError::Cancelled)
        }
        Err(err) => {
            tracing::warn!(endpoint = %path, "{}", err);

            Err(err)
        }
    }
}

/// Run a future to completion unless `timeout` elapses first
pub async fn with_timeout<F: Future>(future: F, timeout: Duration) -> Result<F::Output, SubmitError> {
    let delay = sleep(timeout);

    futures::pin_mut!(future);
    futures::pin_mut!(delay);

    match future::select(future, delay).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => Err(SubmitError::TimedOut(timeout)),
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
