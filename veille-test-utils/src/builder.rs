//! Declarative test builder.
//!
//! Endpoints are queued on the builder and created on a fresh mock server during
//! `build()`.

use crate::{fixtures::MockEndpoint, TestContext};

/// Builder for a mock portal API
///
/// ```no_run
/// use veille_test_utils::prelude::*;
///
/// # async fn example() {
/// let test = TestBuilder::new()
///     .with_endpoint(MockEndpoint::login_failure(INVALID_CREDENTIALS))
///     .build()
///     .await;
///
/// // ... point a transport at `test.url()` and submit ...
///
/// test.assert_mocks();
/// # }
/// ```
#[derive(Debug, Default)]
pub struct TestBuilder {
    endpoints: Vec<MockEndpoint>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an endpoint to create on the mock server
    pub fn with_endpoint(mut self, endpoint: MockEndpoint) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    /// Start the mock server and create every queued endpoint
    pub async fn build(self) -> TestContext {
        let mut context = TestContext::new().await;

        for endpoint in self.endpoints {
            context.mock_endpoint(endpoint).await;
        }

        context
    }
}
