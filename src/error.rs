/// Error types for the submission flow
use thiserror::Error;

/// Everything that can end a run early
#[derive(Error, Debug)]
pub enum SubmitError {
    /// One or more required environment variables are absent or empty
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingEnvVars(Vec<&'static str>),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transport-level failure (DNS, TLS, timeout, client build)
    #[error("network error: {0}")]
    Network(String),

    /// Endpoint answered with something other than 200
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Endpoint answered 200 but did not report success
    #[error("submission failed: {0}")]
    Rejected(String),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl SubmitError {
    /// Names of the missing variables, empty for every other variant
    pub fn missing_vars(&self) -> &[&'static str] {
        match self {
            SubmitError::MissingEnvVars(names) => names.as_slice(),
            _ => &[],
        }
    }
}
