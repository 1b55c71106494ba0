/// Submission module - HTTPS delivery of the signed application
pub mod network;

#[cfg(test)]
pub(crate) mod stub;

pub use network::{submit_application, SubmissionReceipt, SIGNATURE_HEADER};
