use std::time::Duration;

use crate::{
    client::{
        config::ClientConfig,
        controller::submission::{
            Attempt, Outcome, Submission, SubmissionState, SubmitButton, SuccessPolicy,
        },
        error::SubmitError,
    },
    model::form::FormSubmission,
};

pub const LOGIN_FIELDS: [&str; 2] = ["username", "password"];

/// State behind the login form
///
/// A successful login hands back the server's `redirect_url` and leaves the submit
/// button disabled while the browser navigates. Any other outcome shows a message in the
/// error region and restores the button.
#[derive(Debug)]
pub struct LoginController {
    submission: Submission,
    form: FormSubmission,
    endpoint: String,
    timeout: Duration,
}

impl LoginController {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            submission: Submission::new(
                SuccessPolicy::Navigate,
                config.login_labels.clone(),
                config.generic_error.clone(),
            ),
            form: FormSubmission::with_fields(&LOGIN_FIELDS),
            endpoint: config.login_endpoint.clone(),
            timeout: config.request_timeout(),
        }
    }

    pub fn form(&self) -> &FormSubmission {
        &self.form
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.form.set(name, value);
    }

    pub fn button(&self) -> &SubmitButton {
        self.submission.button()
    }

    pub fn state(&self) -> SubmissionState {
        self.submission.state()
    }

    /// Text of the error region, empty when there is nothing to report
    pub fn error_message(&self) -> &str {
        self.submission
            .feedback()
            .map(|feedback| feedback.text.as_str())
            .unwrap_or_default()
    }

    /// Start a login, snapshotting the current field values
    pub fn begin(&mut self) -> Result<Attempt, SubmitError> {
        let ticket = self.submission.begin()?;

        Ok(Attempt::new(
            ticket,
            self.endpoint.clone(),
            self.form.clone(),
            self.timeout,
        ))
    }

    /// Apply the result of a login request
    ///
    /// Returns the URL the browser must navigate to on success.
    pub fn resolve(&mut self, outcome: Outcome) -> Option<String> {
        self.submission.resolve(outcome)?.navigate_to
    }

    /// Report that the browser could not follow the redirect, making the form usable again
    pub fn navigation_failed(&mut self) -> bool {
        self.submission.navigation_failed()
    }
}
