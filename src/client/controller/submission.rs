//! Submission state machine shared by the login and contact forms.
//!
//! ```text
//! Idle -> Submitting -> { Succeeded | Failed | NetworkError } -> (next begin) Submitting
//!              \-> Idle (cancel)
//! ```
//!
//! Entering `Submitting` disables the button, swaps in the pending label and clears prior
//! feedback. What happens on exit depends on the form's [`SuccessPolicy`]: the login form
//! leaves the button disabled after a success because the page is navigating away, the
//! contact form always restores it. Every other exit restores the button fully.

use std::time::Duration;

use dioxus_logger::tracing;
use futures::future::{AbortHandle, AbortRegistration};

use crate::{
    client::{
        config::ButtonLabels,
        error::SubmitError,
        transport::{self, ApiTransport},
    },
    model::{api::ApiResponseDto, form::FormSubmission},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
    NetworkError,
}

/// How a form leaves `Submitting` after the server accepted the submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessPolicy {
    /// Follow the response's `redirect_url`, keeping the button disabled.
    Navigate,
    /// Stay on the page, restore the button and clear the form.
    StayAndReset,
}

/// Label and disabled flag of a submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    label: String,
    disabled: bool,
    labels: ButtonLabels,
}

impl SubmitButton {
    pub fn new(labels: ButtonLabels) -> Self {
        Self {
            label: labels.idle.clone(),
            disabled: false,
            labels,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn press(&mut self) {
        self.label.clone_from(&self.labels.pending);
        self.disabled = true;
    }

    fn restore(&mut self) {
        self.label.clone_from(&self.labels.idle);
        self.disabled = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Affirmative,
    Negative,
}

impl Tone {
    /// CSS color of a message with this tone
    pub fn color(self) -> &'static str {
        match self {
            Self::Affirmative => "green",
            Self::Negative => "red",
        }
    }
}

/// Text shown in a form's message region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub tone: Tone,
}

impl Feedback {
    fn affirmative(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Affirmative,
        }
    }

    fn negative(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Negative,
        }
    }
}

/// Side effects the view performs after a submission reached a terminal state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SubmissionState,
    pub navigate_to: Option<String>,
    pub clear_form: bool,
}

impl Transition {
    fn to(state: SubmissionState) -> Self {
        Self {
            state,
            navigate_to: None,
            clear_form: false,
        }
    }
}

/// Identifies one submission so late results of an earlier one are ignored
#[derive(Debug)]
pub struct Ticket {
    pub id: u64,
    pub registration: AbortRegistration,
}

/// A submission that entered `Submitting` and still has to be sent
#[derive(Debug)]
pub struct Attempt {
    pub id: u64,
    pub endpoint: String,
    pub form: FormSubmission,
    pub timeout: Duration,
    registration: AbortRegistration,
}

impl Attempt {
    pub fn new(
        ticket: Ticket,
        endpoint: impl Into<String>,
        form: FormSubmission,
        timeout: Duration,
    ) -> Self {
        Self {
            id: ticket.id,
            endpoint: endpoint.into(),
            form,
            timeout,
            registration: ticket.registration,
        }
    }

    /// POST the form, bounded by the attempt's timeout and cancellation
    pub async fn send<T: ApiTransport>(self, transport: &T) -> Outcome {
        let result = transport::send(
            transport,
            &self.endpoint,
            &self.form,
            self.timeout,
            self.registration,
        )
        .await;

        Outcome {
            id: self.id,
            result,
        }
    }
}

/// Result of sending an [`Attempt`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub id: u64,
    pub result: Result<ApiResponseDto, SubmitError>,
}

#[derive(Debug)]
pub struct Submission {
    state: SubmissionState,
    button: SubmitButton,
    feedback: Option<Feedback>,
    policy: SuccessPolicy,
    generic_error: String,
    attempts: u64,
    in_flight: Option<AbortHandle>,
}

impl Submission {
    pub fn new(policy: SuccessPolicy, labels: ButtonLabels, generic_error: impl Into<String>) -> Self {
        Self {
            state: SubmissionState::Idle,
            button: SubmitButton::new(labels),
            feedback: None,
            policy,
            generic_error: generic_error.into(),
            attempts: 0,
            in_flight: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Handle to abort the submission in flight, if any
    pub fn abort_handle(&self) -> Option<AbortHandle> {
        self.in_flight.clone()
    }

    /// Enter `Submitting`
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The id and abort registration for the request to send
    /// - `Err(SubmitError::AlreadySubmitting)` - A submission is already in flight, nothing
    ///   should be sent
    pub fn begin(&mut self) -> Result<Ticket, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }

        let (handle, registration) = AbortHandle::new_pair();
        self.attempts += 1;
        self.in_flight = Some(handle);

        self.state = SubmissionState::Submitting;
        self.button.press();
        self.feedback = None;

        Ok(Ticket {
            id: self.attempts,
            registration,
        })
    }

    /// Leave `Submitting` with the result of the request
    ///
    /// Returns `None` when the outcome belongs to a submission that is no longer in flight
    /// (cancelled, or superseded by a newer one); the state is left untouched.
    pub fn resolve(&mut self, outcome: Outcome) -> Option<Transition> {
        if !self.is_submitting() || outcome.id != self.attempts {
            tracing::debug!(attempt = outcome.id, "Ignoring outcome of stale submission");

            return None;
        }

        self.in_flight = None;

        let transition = match outcome.result {
            Ok(response) if response.success => self.succeed(response),
            Ok(response) => {
                self.button.restore();
                self.feedback = Some(Feedback::negative(
                    response
                        .message
                        .unwrap_or_else(|| self.generic_error.clone()),
                ));

                Transition::to(SubmissionState::Failed)
            }
            Err(SubmitError::Cancelled) => {
                self.button.restore();

                Transition::to(SubmissionState::Idle)
            }
            Err(err) => {
                tracing::debug!("Submission failed: {}", err);

                self.network_error()
            }
        };

        self.state = transition.state;

        Some(transition)
    }

    /// Abort the submission in flight and return to `Idle` with the button restored
    ///
    /// Returns `false` when there was nothing to cancel.
    pub fn cancel(&mut self) -> bool {
        if !self.is_submitting() {
            return false;
        }

        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }

        self.state = SubmissionState::Idle;
        self.button.restore();

        true
    }

    /// Leave a navigating `Succeeded` state when the browser refused to navigate
    ///
    /// Shows the generic error and restores the button. Returns `false` when no
    /// navigation was pending.
    pub fn navigation_failed(&mut self) -> bool {
        if self.policy != SuccessPolicy::Navigate || self.state != SubmissionState::Succeeded {
            return false;
        }

        self.state = self.network_error().state;

        true
    }

    fn succeed(&mut self, response: ApiResponseDto) -> Transition {
        match self.policy {
            SuccessPolicy::Navigate => match response.redirect_url {
                Some(url) => Transition {
                    state: SubmissionState::Succeeded,
                    navigate_to: Some(url),
                    clear_form: false,
                },
                None => {
                    tracing::warn!("Successful response carries no redirect_url");

                    self.network_error()
                }
            },
            SuccessPolicy::StayAndReset => {
                self.button.restore();
                self.feedback = Some(Feedback::affirmative(response.message.unwrap_or_default()));

                Transition {
                    state: SubmissionState::Succeeded,
                    navigate_to: None,
                    clear_form: true,
                }
            }
        }
    }

    fn network_error(&mut self) -> Transition {
        self.button.restore();
        self.feedback = Some(Feedback::negative(self.generic_error.clone()));

        Transition::to(SubmissionState::NetworkError)
    }
}
