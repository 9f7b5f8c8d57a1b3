//! Mock endpoint definitions.

use serde_json::{json, Value};

use crate::constant::{CONTACT_PATH, LOGIN_PATH};

/// A POST endpoint the mock server answers, with what it expects to receive
#[derive(Debug, Clone)]
pub struct MockEndpoint {
    pub path: String,
    pub status: usize,
    pub content_type: String,
    pub body: String,
    /// JSON the request body must equal, any body matches when `None`.
    pub expected_body: Option<Value>,
    /// How many requests the endpoint expects.
    pub hits: usize,
}

impl MockEndpoint {
    /// Endpoint answering a JSON body with the given status
    pub fn json(path: &str, status: usize, body: Value) -> Self {
        Self {
            path: path.to_string(),
            status,
            content_type: "application/json".to_string(),
            body: body.to_string(),
            expected_body: None,
            hits: 1,
        }
    }

    /// Endpoint answering something that is not JSON, like a proxy error page
    pub fn malformed(path: &str) -> Self {
        Self {
            path: path.to_string(),
            status: 502,
            content_type: "text/html".to_string(),
            body: "<html><body>Bad Gateway</body></html>".to_string(),
            expected_body: None,
            hits: 1,
        }
    }

    pub fn login_success(redirect_url: &str) -> Self {
        Self::json(
            LOGIN_PATH,
            200,
            json!({"success": true, "redirect_url": redirect_url}),
        )
    }

    pub fn login_failure(message: &str) -> Self {
        Self::json(LOGIN_PATH, 401, json!({"success": false, "message": message}))
    }

    pub fn contact_success(message: &str) -> Self {
        Self::json(CONTACT_PATH, 200, json!({"success": true, "message": message}))
    }

    pub fn contact_failure(status: usize, message: &str) -> Self {
        Self::json(
            CONTACT_PATH,
            status,
            json!({"success": false, "message": message}),
        )
    }

    /// Require the request body to equal `body`
    pub fn expect_body(mut self, body: Value) -> Self {
        self.expected_body = Some(body);
        self
    }

    /// Require exactly `hits` requests
    pub fn expect_hits(mut self, hits: usize) -> Self {
        self.hits = hits;
        self
    }
}
