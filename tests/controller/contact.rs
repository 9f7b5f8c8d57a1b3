use serde_json::json;
use veille::client::{
    config::ClientConfig,
    controller::{submission::SubmissionState, ClickTarget, ContactModalController},
    transport::native::NativeTransport,
};
use veille_test_utils::prelude::*;

fn setup(test: &TestContext) -> (ContactModalController, NativeTransport) {
    let mut config = ClientConfig::default();
    config.api_base_url = test.url();

    let transport = NativeTransport::from_config(&config).unwrap();
    let mut controller = ContactModalController::new(&config);
    controller.handle_click(ClickTarget::OpenTrigger);
    controller.set_field("email", "alice@example.com");
    controller.set_field("motive", "Account access");
    controller.set_field("message", "I forgot my password.");

    (controller, transport)
}

/// Expect a green confirmation, a cleared form and a usable button after sending
#[tokio::test]
async fn confirms_and_clears_form_on_success() {
    let test = TestBuilder::new()
        .with_endpoint(MockEndpoint::contact_success(REQUEST_SENT).expect_body(json!({
            "email": "alice@example.com",
            "motive": "Account access",
            "message": "I forgot my password."
        })))
        .build()
        .await;
    let (mut controller, transport) = setup(&test);

    let attempt = controller.begin().unwrap();
    controller.resolve(attempt.send(&transport).await);

    let status = controller.status().unwrap();
    assert_eq!(status.text, REQUEST_SENT);
    assert_eq!(status.tone.color(), "green");
    assert_eq!(controller.state(), SubmissionState::Succeeded);
    assert!(!controller.button().is_disabled());
    assert_eq!(controller.button().label(), "Send");
    assert!(controller.form().iter().all(|(_, value)| value.is_empty()));
    test.assert_mocks();
}

/// Expect the validation message in red and the fields kept on a 400
#[tokio::test]
async fn keeps_fields_when_server_rejects() {
    let test = TestBuilder::new()
        .with_endpoint(MockEndpoint::contact_failure(400, FIELDS_REQUIRED))
        .build()
        .await;
    let (mut controller, transport) = setup(&test);
    controller.set_field("motive", "");

    let attempt = controller.begin().unwrap();
    controller.resolve(attempt.send(&transport).await);

    let status = controller.status().unwrap();
    assert_eq!(status.text, FIELDS_REQUIRED);
    assert_eq!(status.tone.color(), "red");
    assert_eq!(controller.state(), SubmissionState::Failed);
    assert_eq!(controller.form().get("email"), Some("alice@example.com"));
    assert!(!controller.button().is_disabled());
    test.assert_mocks();
}

/// Expect the mail failure message to be shown verbatim on a 500
#[tokio::test]
async fn shows_mail_failure() {
    let test = TestBuilder::new()
        .with_endpoint(MockEndpoint::contact_failure(500, MAIL_ERROR))
        .build()
        .await;
    let (mut controller, transport) = setup(&test);

    let attempt = controller.begin().unwrap();
    controller.resolve(attempt.send(&transport).await);

    assert_eq!(controller.status().unwrap().text, MAIL_ERROR);
    assert_eq!(controller.button().label(), "Send");
    test.assert_mocks();
}

/// Expect the generic error in red when the response cannot be parsed
#[tokio::test]
async fn shows_generic_error_on_malformed_response() {
    let test = TestBuilder::new()
        .with_endpoint(MockEndpoint::malformed(CONTACT_PATH))
        .build()
        .await;
    let (mut controller, transport) = setup(&test);

    let attempt = controller.begin().unwrap();
    controller.resolve(attempt.send(&transport).await);

    let status = controller.status().unwrap();
    assert_eq!(status.text, "Error");
    assert_eq!(status.tone.color(), "red");
    assert_eq!(controller.state(), SubmissionState::NetworkError);
    assert!(!controller.button().is_disabled());
    test.assert_mocks();
}
