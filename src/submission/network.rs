/// Network submission of the signed application
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::SubmitError;
use crate::signing::{signature_header, SignedPayload};

/// Header carrying `sha256=<hex>`
pub const SIGNATURE_HEADER: &str = "X-Signature-256";

/// Upper bound for the whole request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Successful submission result
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub receipt: Option<String>,
}

/// POST the signed payload to the endpoint
///
/// # Arguments
/// * `url` - Endpoint URL
/// * `signed` - Canonical body and its signature
///
/// # Returns
/// The receipt on HTTP 200 with `{"success": true}`, an error otherwise.
/// Failures are not retried.
pub fn submit_application(url: &str, signed: &SignedPayload) -> Result<SubmissionReceipt, SubmitError> {
    // Make HTTP request with timeout
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .danger_accept_invalid_certs(false) // Enforce SSL verification
        .build()
        .map_err(|e| SubmitError::Network(format!("failed to create HTTP client: {}", e)))?;

    info!(url, bytes = signed.body.len(), "POST submission");

    let response = client
        .post(url)
        .header("Content-Type", "application/json")
        .header(SIGNATURE_HEADER, signature_header(&signed.signature))
        .body(signed.body.clone())
        .send()
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    let status = response.status();
    debug!(status = status.as_u16(), "response received");

    let body = response
        .text()
        .map_err(|e| SubmitError::Network(format!("failed to read response body: {}", e)))?;

    if status != reqwest::StatusCode::OK {
        warn!(status = status.as_u16(), %body, "submission endpoint returned an error");
        return Err(SubmitError::Http {
            status: status.as_u16(),
            body,
        });
    }

    parse_response(&body)
}

/// Interpret a 200 response body
fn parse_response(body: &str) -> Result<SubmissionReceipt, SubmitError> {
    let result: Value =
        serde_json::from_str(body).map_err(|e| SubmitError::InvalidResponse(e.to_string()))?;

    if result.get("success").and_then(Value::as_bool) != Some(true) {
        return Err(SubmitError::Rejected(body.to_string()));
    }

    let receipt = result
        .get("receipt")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(SubmissionReceipt { receipt })
}
