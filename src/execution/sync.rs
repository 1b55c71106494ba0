/// Synchronous execution
/// Sign the record, print it, then submit it when enabled

use std::io::Write;

use tracing::info;

use crate::config::{validate_endpoint, SubmissionConfig};
use crate::error::SubmitError;
use crate::signing::{sign_record, SignedPayload, SubmissionRecord};
use crate::submission::submit_application;

/// Execute one pass
///
/// Flow:
/// 1. Build and sign the record
/// 2. Write `Payload JSON:` and `Signature:` lines to `out`
/// 3. If submission is enabled → POST to `endpoint` and write the receipt
///
/// Any error is terminal for the run; nothing is retried.
pub fn execute_sync<W: Write>(
    config: &SubmissionConfig,
    endpoint: &str,
    out: &mut W,
) -> Result<(), SubmitError> {
    let record = SubmissionRecord::new(config);
    let signed = sign_record(&record, &config.signing_secret)?;

    writeln!(out, "Payload JSON: {}", signed.body_str())?;
    writeln!(out, "Signature: {}", signed.signature)?;

    if !config.submit {
        info!("network submission disabled, set SUBMISSION_ENABLED=true to send");
        return Ok(());
    }

    submit(endpoint, &signed, out)
}

fn submit<W: Write>(endpoint: &str, signed: &SignedPayload, out: &mut W) -> Result<(), SubmitError> {
    validate_endpoint(endpoint)?;

    let response = submit_application(endpoint, signed)?;

    writeln!(out, "Application submitted:")?;
    writeln!(out, "Receipt: {}", response.receipt.as_deref().unwrap_or_default())?;
    info!(receipt = response.receipt.as_deref(), "submission accepted");
    Ok(())
}

/// Write the missing-variable report
pub fn report_missing<W: Write>(missing: &[&str], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "The following environment variables are required:")?;
    for var in missing {
        writeln!(out, "  - {}", var)?;
    }
    Ok(())
}

/// Process exit status for a finished run: 0 on success, 1 on any error
pub fn exit_status(result: &Result<(), SubmitError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
