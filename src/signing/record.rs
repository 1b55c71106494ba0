/// Submission record and its signed form
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::canonical::canonicalize_json;
use super::hmac::create_signature;
use crate::config::SubmissionConfig;
use crate::error::SubmitError;

/// Application record sent to the endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionRecord {
    pub action_run_link: String,
    pub email: String,
    pub name: String,
    pub repository_link: String,
    pub resume_link: String,
    /// ISO-8601 UTC with millisecond precision, e.g. `2025-01-31T12:00:00.123Z`
    pub timestamp: String,
}

/// Canonical body plus its hex signature
#[derive(Debug, Clone)]
pub struct SignedPayload {
    pub body: Vec<u8>,
    pub signature: String,
}

impl SignedPayload {
    /// Body as text for display
    pub fn body_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Current UTC time in the record's timestamp format
pub fn current_timestamp() -> String {
    format_timestamp(Utc::now())
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl SubmissionRecord {
    /// Build a record stamped with the current time
    pub fn new(config: &SubmissionConfig) -> Self {
        Self::from_config(config, current_timestamp())
    }

    pub fn from_config(config: &SubmissionConfig, timestamp: String) -> Self {
        Self {
            action_run_link: config.action_run_link.clone(),
            email: config.email.clone(),
            name: config.name.clone(),
            repository_link: config.repository_link.clone(),
            resume_link: config.resume_link.clone(),
            timestamp,
        }
    }
}

/// Canonicalize and sign a record
pub fn sign_record(record: &SubmissionRecord, secret: &str) -> Result<SignedPayload, SubmitError> {
    let body = canonicalize_json(record)?;
    let signature = create_signature(&body, secret);
    Ok(SignedPayload { body, signature })
}
