//! Error handlers
//!
//! Logs host failures and maps errors and outcomes to process exit codes.

use crate::error::types::PolicyError;
use crate::policy::ValidationResult;
use log::error;

pub const EXIT_ACCEPTED: u8 = 0;
pub const EXIT_REJECTED: u8 = 1;

/// Handle a host error
pub fn handle_error(err: &PolicyError) {
    error!("Credential policy error: {}", err);
}

/// Convert error to exit code
pub fn error_to_exit_code(err: &PolicyError) -> u8 {
    match err {
        PolicyError::Usage(_) => 2,
        PolicyError::Config(_) => 3,
        PolicyError::Request { .. } => 4,
    }
}

/// Convert a validation outcome to exit code
pub fn result_to_exit_code(result: &ValidationResult) -> u8 {
    match result {
        ValidationResult::Accepted => EXIT_ACCEPTED,
        ValidationResult::Rejected(_) => EXIT_REJECTED,
    }
}
