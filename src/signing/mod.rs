/// Signing module - Canonical payload construction and HMAC authentication
pub mod canonical;
pub mod hmac;
pub mod record;

pub use canonical::canonicalize_json;
pub use hmac::{create_signature, signature_header, verify_signature};
pub use record::{sign_record, SignedPayload, SubmissionRecord};
