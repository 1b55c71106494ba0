/// Configuration module - Load and validate submission configuration
pub mod schema;
pub mod loader;

pub use schema::{validate_endpoint, SubmissionConfig, REQUIRED_ENV_VARS};
pub use loader::load_config;
