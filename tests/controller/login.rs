use serde_json::json;
use veille::client::{
    config::ClientConfig,
    controller::{submission::SubmissionState, LoginController},
    transport::native::NativeTransport,
};
use veille_test_utils::prelude::*;

fn setup(test: &TestContext) -> (LoginController, NativeTransport) {
    let mut config = ClientConfig::default();
    config.api_base_url = test.url();

    let transport = NativeTransport::from_config(&config).unwrap();
    let mut controller = LoginController::new(&config);
    controller.set_field("username", "alice");
    controller.set_field("password", "hunter2");

    (controller, transport)
}

/// Expect the browser to be sent to the redirect URL after a successful login
#[tokio::test]
async fn redirects_on_success() {
    let test = TestBuilder::new()
        .with_endpoint(
            MockEndpoint::login_success(DISPATCH_URL)
                .expect_body(json!({"username": "alice", "password": "hunter2"})),
        )
        .build()
        .await;
    let (mut controller, transport) = setup(&test);

    let attempt = controller.begin().unwrap();
    let navigate_to = controller.resolve(attempt.send(&transport).await);

    assert_eq!(navigate_to.as_deref(), Some(DISPATCH_URL));
    assert_eq!(controller.state(), SubmissionState::Succeeded);
    assert!(controller.button().is_disabled());
    test.assert_mocks();
}

/// Expect first logins to follow the password change redirect verbatim
#[tokio::test]
async fn follows_first_login_redirect() {
    let test = TestBuilder::new()
        .with_endpoint(MockEndpoint::login_success(CHANGE_PASSWORD_URL))
        .build()
        .await;
    let (mut controller, transport) = setup(&test);

    let attempt = controller.begin().unwrap();
    let navigate_to = controller.resolve(attempt.send(&transport).await);

    assert_eq!(navigate_to.as_deref(), Some(CHANGE_PASSWORD_URL));
    test.assert_mocks();
}

/// Expect the server message and a usable button when credentials are rejected with 401
#[tokio::test]
async fn shows_message_on_invalid_credentials() {
    let test = TestBuilder::new()
        .with_endpoint(MockEndpoint::login_failure(INVALID_CREDENTIALS))
        .build()
        .await;
    let (mut controller, transport) = setup(&test);

    let attempt = controller.begin().unwrap();
    let navigate_to = controller.resolve(attempt.send(&transport).await);

    assert_eq!(navigate_to, None);
    assert_eq!(controller.state(), SubmissionState::Failed);
    assert_eq!(controller.error_message(), INVALID_CREDENTIALS);
    assert!(!controller.button().is_disabled());
    assert_eq!(controller.button().label(), "Se connecter");
    test.assert_mocks();
}

/// Expect the generic error when the response is not JSON
#[tokio::test]
async fn shows_generic_error_on_malformed_response() {
    let test = TestBuilder::new()
        .with_endpoint(MockEndpoint::malformed(LOGIN_PATH))
        .build()
        .await;
    let (mut controller, transport) = setup(&test);

    let attempt = controller.begin().unwrap();
    controller.resolve(attempt.send(&transport).await);

    assert_eq!(controller.state(), SubmissionState::NetworkError);
    assert_eq!(controller.error_message(), "Error");
    assert!(!controller.button().is_disabled());
    test.assert_mocks();
}

/// Expect one request per submit and a fresh request for a retry
#[tokio::test]
async fn retry_sends_a_new_request() {
    let test = TestBuilder::new()
        .with_endpoint(MockEndpoint::login_failure(INVALID_CREDENTIALS).expect_hits(2))
        .build()
        .await;
    let (mut controller, transport) = setup(&test);

    let attempt = controller.begin().unwrap();
    assert!(controller.begin().is_err(), "Double submit is rejected");
    controller.resolve(attempt.send(&transport).await);

    let retry = controller.begin().unwrap();
    controller.resolve(retry.send(&transport).await);

    assert_eq!(controller.error_message(), INVALID_CREDENTIALS);
    test.assert_mocks();
}

/// Expect a body carrying only a message to be shown as a rejected login
#[tokio::test]
async fn shows_message_when_success_flag_is_missing() {
    let test = TestBuilder::new()
        .with_endpoint(MockEndpoint::json(
            LOGIN_PATH,
            401,
            json!({"message": INVALID_CREDENTIALS}),
        ))
        .build()
        .await;
    let (mut controller, transport) = setup(&test);

    let attempt = controller.begin().unwrap();
    let navigate_to = controller.resolve(attempt.send(&transport).await);

    assert_eq!(navigate_to, None);
    assert_eq!(controller.state(), SubmissionState::Failed);
    assert_eq!(controller.error_message(), INVALID_CREDENTIALS);
    assert!(!controller.button().is_disabled());
    test.assert_mocks();
}
