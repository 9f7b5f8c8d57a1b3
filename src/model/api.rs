use serde::{Deserialize, Serialize};

/// The JSON body returned by the login and contact-admin endpoints
///
/// The server sends this body with non-2xx statuses as well (401 for bad credentials,
/// 400 for missing contact fields, 500 when the admin e-mail could not be sent), so it
/// is parsed whatever the HTTP status is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponseDto {
    /// Whether the server accepted the submission, `false` when absent
    #[serde(default)]
    pub success: bool,
    /// Message meant to be shown to the user verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Where the browser goes after a successful login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}
