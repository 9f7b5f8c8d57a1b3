//! Test context returned by `TestBuilder`.

use mockito::{Matcher, Mock, Server, ServerGuard};

use crate::fixtures::MockEndpoint;

/// Running mock server and the endpoints created on it
pub struct TestContext {
    server: ServerGuard,
    mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock server, e.g. `http://127.0.0.1:1234`
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Create an endpoint on the running server
    pub async fn mock_endpoint(&mut self, endpoint: MockEndpoint) {
        let mut mock = self
            .server
            .mock("POST", endpoint.path.as_str())
            .match_header("content-type", "application/json")
            .with_status(endpoint.status)
            .with_header("content-type", &endpoint.content_type)
            .with_body(&endpoint.body)
            .expect(endpoint.hits);

        if let Some(expected_body) = endpoint.expected_body {
            mock = mock.match_body(Matcher::Json(expected_body));
        }

        self.mocks.push(mock.create_async().await);
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
