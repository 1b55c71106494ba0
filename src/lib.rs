//! Application submitter - canonical payload signing and delivery
//!
//! Reads the applicant's details from the environment, serializes them as
//! canonical JSON, signs the bytes with HMAC-SHA256 and optionally POSTs
//! them to the submission endpoint.

// Module declarations
pub mod config;
pub mod error;
pub mod execution;
pub mod signing;
pub mod submission;
pub mod utils;

pub use error::SubmitError;
