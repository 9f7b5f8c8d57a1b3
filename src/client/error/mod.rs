//! Error types for the Veille web client.
//!
//! Submission errors cover everything that can go wrong between pressing a submit
//! button and receiving a parsed response body. Whatever the cause, the user only ever
//! sees the configured generic message; the variants exist for logging and tests.

pub mod config;
pub mod submit;

use thiserror::Error;

pub use config::ConfigError;
pub use submit::SubmitError;

/// Main error type for the Veille web client.
///
/// Aggregates the per-concern error types so callers crossing concerns (loading the
/// configuration and building a transport, for instance) can use `?` on either.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration error (invalid environment value, base URL or HTTP client).
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Submission error (transport, parse, timeout, cancellation, double submit).
    #[error(transparent)]
    Submit(#[from] SubmitError),
}
