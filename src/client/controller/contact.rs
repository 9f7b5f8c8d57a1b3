use std::time::Duration;

use dioxus_logger::tracing;

use crate::{
    client::{
        config::ClientConfig,
        controller::{
            listeners::ListenerId,
            modal::{ClickTarget, ModalController, ModalEvent},
            submission::{
                Attempt, Feedback, Outcome, Submission, SubmissionState, SubmitButton,
                SuccessPolicy,
            },
        },
        error::SubmitError,
    },
    model::form::FormSubmission,
};

pub const CONTACT_FIELDS: [&str; 3] = ["email", "motive", "message"];

/// State behind the contact-admin modal and its form
///
/// The modal is shown and hidden without any network traffic. A submission in flight
/// subscribes to the modal's close event, so closing the dialog aborts the request; the
/// cancelled outcome then puts the form back to idle.
#[derive(Debug)]
pub struct ContactModalController {
    modal: ModalController,
    submission: Submission,
    form: FormSubmission,
    endpoint: String,
    timeout: Duration,
    abort_on_close: Option<ListenerId>,
}

impl ContactModalController {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            modal: ModalController::new(),
            submission: Submission::new(
                SuccessPolicy::StayAndReset,
                config.contact_labels.clone(),
                config.generic_error.clone(),
            ),
            form: FormSubmission::with_fields(&CONTACT_FIELDS),
            endpoint: config.contact_endpoint.clone(),
            timeout: config.request_timeout(),
            abort_on_close: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.modal.is_visible()
    }

    /// CSS `display` value for the modal container
    pub fn display(&self) -> &'static str {
        self.modal.display()
    }

    pub fn handle_click(&mut self, target: ClickTarget) {
        self.modal.handle_click(target);
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ModalEvent) + 'static,
    {
        self.modal.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.modal.unsubscribe(id)
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

    /// Message shown in the status region, with its tone
    pub fn status(&self) -> Option<&Feedback> {
        self.submission.feedback()
    }

    /// Start sending the contact form, snapshotting the current field values
    pub fn begin(&mut self) -> Result<Attempt, SubmitError> {
        let ticket = self.submission.begin()?;

        if let Some(handle) = self.submission.abort_handle() {
            let listener = self.modal.subscribe(move |event| {
                if *event == ModalEvent::Closed {
                    tracing::debug!("Contact modal closed with a submission in flight");

                    handle.abort();
                }
            });
            self.abort_on_close = Some(listener);
        }

        Ok(Attempt::new(
            ticket,
            self.endpoint.clone(),
            self.form.clone(),
            self.timeout,
        ))
    }

    /// Apply the result of a contact request, clearing the form on success
    pub fn resolve(&mut self, outcome: Outcome) {
        let Some(transition) = self.submission.resolve(outcome) else {
            return;
        };

        self.release_abort_listener();

        if transition.clear_form {
            self.form.clear();
        }
    }

    /// Abort the submission in flight and restore the send button
    pub fn cancel(&mut self) -> bool {
        self.release_abort_listener();

        self.submission.cancel()
    }

    fn release_abort_listener(&mut self) {
        if let Some(listener) = self.abort_on_close.take() {
            self.modal.unsubscribe(listener);
        }
    }
}
