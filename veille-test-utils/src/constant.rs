//! Paths and canned messages of the portal API.
//!
//! Values mirror what the server answers, so tests read like real exchanges.

pub static LOGIN_PATH: &str = "/api/login";
pub static CONTACT_PATH: &str = "/api/contact_admin";

/// Redirect target for a regular login.
pub static DISPATCH_URL: &str = "/dispatch";
/// Redirect target for a first login, which must change the password.
pub static CHANGE_PASSWORD_URL: &str = "/change_password";

pub static INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub static FIELDS_REQUIRED: &str = "All fields are required.";
pub static REQUEST_SENT: &str = "Request sent to administration.";
pub static MAIL_ERROR: &str = "Error sending email.";
