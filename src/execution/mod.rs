/// Execution module - Run-to-completion flow behind the binary
pub mod sync;

pub use sync::{execute_sync, exit_status, report_missing};
