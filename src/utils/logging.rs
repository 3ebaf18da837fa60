//! Logging utilities
//!
//! Provides logging setup and outcome reporting for hosts.

use log::{info, warn};

use crate::error::RejectionReason;
use crate::policy::{CredentialChangeRequest, ValidationResult};

/// Setup logging for the host (`RUST_LOG` controls verbosity)
pub fn setup_logging() {
    env_logger::init();
}

/// Log the outcome of validating a request. Passwords are never logged.
pub fn log_outcome(request: &CredentialChangeRequest, result: &ValidationResult) {
    match result {
        ValidationResult::Accepted => {
            info!("Password change accepted for user {}", request.username)
        }
        ValidationResult::Rejected(reason) => log_rejection(&request.username, reason),
    }
}

/// Log a single rejection
pub fn log_rejection(username: &str, reason: &RejectionReason) {
    warn!("Password change rejected for user {}: {:?}", username, reason);
}
