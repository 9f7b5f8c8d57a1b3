use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The request never produced a response (connection refused, DNS, CORS, ...).
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// A response arrived but its body is not the expected JSON object.
    #[error("Failed to parse response body: {0}")]
    Parse(String),
    /// No response arrived before the configured request timeout.
    #[error("Request did not complete within {0:?}")]
    TimedOut(Duration),
    /// The request was aborted, e.g. by closing the contact modal.
    #[error("Request was cancelled before it completed")]
    Cancelled,
    /// The form was submitted again while a request is still in flight.
    #[error("A submission for this form is already in flight")]
    AlreadySubmitting,
}
