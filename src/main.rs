//! Application submitter binary
//!
//! Invoked from a CI pipeline:
//! 1. Load applicant details and the signing secret from the environment
//! 2. Build and canonicalize the submission record
//! 3. Sign it with HMAC-SHA256 and print payload + signature
//! 4. POST it to the endpoint when SUBMISSION_ENABLED is set

use std::io;
use std::process::ExitCode;

use submit_application::config::load_config;
use submit_application::execution::{execute_sync, exit_status, report_missing};
use submit_application::utils::init_logging;
use submit_application::SubmitError;
use tracing::{debug, error};

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(cfg) => cfg,
        Err(SubmitError::MissingEnvVars(missing)) => {
            let _ = report_missing(&missing, &mut io::stdout().lock());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.log_level);
    debug!(?config, "configuration loaded");

    let result = execute_sync(&config, &config.endpoint_url(), &mut io::stdout().lock());
    if let Err(e) = &result {
        error!(error = %e, "submission run failed");
    }

    ExitCode::from(exit_status(&result))
}
