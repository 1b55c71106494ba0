/// Configuration schema for the submission binary
use std::fmt;

use crate::error::SubmitError;

/// Endpoint used when no compile-time override is present
pub const DEFAULT_ENDPOINT_URL: &str = "https://b12.io/apply/submission";

/// Required environment variables, in reporting order
pub const REQUIRED_ENV_VARS: [&str; 6] = [
    "SIGNING_SECRET",
    "NAME",
    "EMAIL",
    "RESUME_LINK",
    "REPOSITORY_LINK",
    "ACTION_RUN_LINK",
];

/// Main configuration structure, assembled once at startup
#[derive(Clone, PartialEq)]
pub struct SubmissionConfig {
    /// HMAC shared secret
    pub signing_secret: String,

    pub name: String,
    pub email: String,
    pub resume_link: String,
    pub repository_link: String,
    pub action_run_link: String,

    /// POST the signed payload to the endpoint
    /// false = sign and print only
    pub submit: bool,

    /// Log level: "trace", "debug", "info", "warn", "error"
    pub log_level: String,
}

// The secret never reaches logs or stdout
impl fmt::Debug for SubmissionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionConfig")
            .field("signing_secret", &"<redacted>")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("resume_link", &self.resume_link)
            .field("repository_link", &self.repository_link)
            .field("action_run_link", &self.action_run_link)
            .field("submit", &self.submit)
            .field("log_level", &self.log_level)
            .finish()
    }
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

impl SubmissionConfig {
    /// Get the effective endpoint URL, prioritizing compile-time override
    pub fn endpoint_url(&self) -> String {
        // If SUBMISSION_ENDPOINT_URL was set at compile time, use it (hardcoded into binary)
        if let Some(compile_time_url) = option_env!("SUBMISSION_ENDPOINT_URL") {
            if !compile_time_url.is_empty() {
                return compile_time_url.to_string();
            }
        }

        DEFAULT_ENDPOINT_URL.to_string()
    }
}

/// Reject empty and non-HTTP(S) endpoints
pub fn validate_endpoint(url: &str) -> Result<(), SubmitError> {
    if url.is_empty() {
        return Err(SubmitError::InvalidEndpoint(
            "endpoint url cannot be empty".to_string(),
        ));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(SubmitError::InvalidEndpoint(format!(
            "endpoint url must start with http:// or https://, got {}",
            url
        )));
    }

    Ok(())
}
