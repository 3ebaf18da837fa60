//! Validation result types
//!
//! Defines the outcome returned by policy evaluation.

use crate::error::RejectionReason;

/// Outcome of validating a credential change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted,
    Rejected(RejectionReason),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted)
    }

    /// The violated rule, if any
    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            ValidationResult::Accepted => None,
            ValidationResult::Rejected(reason) => Some(*reason),
        }
    }

    /// Convert into a `Result` so callers can propagate with `?`
    pub fn into_result(self) -> Result<(), RejectionReason> {
        match self {
            ValidationResult::Accepted => Ok(()),
            ValidationResult::Rejected(reason) => Err(reason),
        }
    }
}

impl From<Option<RejectionReason>> for ValidationResult {
    fn from(reason: Option<RejectionReason>) -> Self {
        reason.map_or(ValidationResult::Accepted, ValidationResult::Rejected)
    }
}
