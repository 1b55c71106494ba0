/// Configuration loader
use super::schema::{default_log_level, SubmissionConfig, REQUIRED_ENV_VARS};
use crate::error::SubmitError;

/// Optional switch enabling the network submission
pub const SUBMIT_TOGGLE_VAR: &str = "SUBMISSION_ENABLED";

/// Optional log level override
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Load configuration from the process environment
pub fn load_config() -> Result<SubmissionConfig, SubmitError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration through an arbitrary lookup
///
/// Absent and empty values are both treated as missing. Every missing
/// name is reported, not just the first.
pub fn load_config_from<F>(lookup: F) -> Result<SubmissionConfig, SubmitError>
where
    F: Fn(&str) -> Option<String>,
{
    let values: Vec<Option<String>> = REQUIRED_ENV_VARS
        .iter()
        .map(|key| lookup(key).filter(|v| !v.is_empty()))
        .collect();

    let missing: Vec<&'static str> = REQUIRED_ENV_VARS
        .iter()
        .zip(&values)
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| *key)
        .collect();

    if !missing.is_empty() {
        return Err(SubmitError::MissingEnvVars(missing));
    }

    // All present past this point
    let mut values = values.into_iter().flatten();
    let mut next = || values.next().unwrap_or_default();

    Ok(SubmissionConfig {
        signing_secret: next(),
        name: next(),
        email: next(),
        resume_link: next(),
        repository_link: next(),
        action_run_link: next(),
        submit: lookup(SUBMIT_TOGGLE_VAR)
            .map(|v| parse_toggle(&v))
            .unwrap_or(false),
        log_level: lookup(LOG_LEVEL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_log_level),
    })
}

fn parse_toggle(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}
