use std::{net::TcpListener, time::Duration};

use futures::future::AbortHandle;
use serde_json::json;
use veille::{
    client::{
        config::ClientConfig,
        error::{ConfigError, Error, SubmitError},
        transport::{native::NativeTransport, send, ApiClient, ApiTransport},
    },
    model::form::FormSubmission,
};
use veille_test_utils::prelude::*;

fn login_form() -> FormSubmission {
    FormSubmission::from_pairs([("username", "alice"), ("password", "hunter2")])
}

/// Expect the JSON body to be parsed even when the status is an error status
#[tokio::test]
async fn parses_body_of_error_status() {
    let test = TestBuilder::new()
        .with_endpoint(MockEndpoint::login_failure(INVALID_CREDENTIALS))
        .build()
        .await;
    let transport = NativeTransport::new(&test.url()).unwrap();

    let response = transport
        .post_json(LOGIN_PATH, &login_form())
        .await
        .unwrap();

    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some(INVALID_CREDENTIALS));
    test.assert_mocks();
}

/// Expect the form to be sent as a flat JSON object
#[tokio::test]
async fn sends_form_as_json_object() {
    let test = TestBuilder::new()
        .with_endpoint(
            MockEndpoint::login_success(DISPATCH_URL)
                .expect_body(json!({"username": "alice", "password": "hunter2"})),
        )
        .build()
        .await;
    let transport = NativeTransport::new(&test.url()).unwrap();

    let response = transport
        .post_json(LOGIN_PATH, &login_form())
        .await
        .unwrap();

    assert_eq!(response.redirect_url.as_deref(), Some(DISPATCH_URL));
    test.assert_mocks();
}

/// Expect Err(SubmitError::Parse) when the body is not JSON
#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let test = TestBuilder::new()
        .with_endpoint(MockEndpoint::malformed(CONTACT_PATH))
        .build()
        .await;
    let transport = NativeTransport::new(&test.url()).unwrap();

    let result = transport
        .post_json(CONTACT_PATH, &FormSubmission::new())
        .await;

    assert!(matches!(result, Err(SubmitError::Parse(_))));
    test.assert_mocks();
}

/// Expect Err(SubmitError::Transport) when nothing listens at the base URL
#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let url = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let transport = NativeTransport::new(&url).unwrap();
    let (_handle, registration) = AbortHandle::new_pair();

    let result = send(
        &transport,
        LOGIN_PATH,
        &login_form(),
        Duration::from_secs(5),
        registration,
    )
    .await;

    assert!(matches!(result, Err(SubmitError::Transport(_))));
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = NativeTransport::new("127.0.0.1 without scheme");

    assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
}

#[test]
fn api_client_reports_invalid_base_url_as_config_error() {
    let mut config = ClientConfig::default();
    config.api_base_url = "127.0.0.1 without scheme".to_string();

    let result = ApiClient::new(config);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidBaseUrl { .. }))
    ));
}
