//! Error types
//!
//! Defines the policy rejection reasons and the errors a host can hit while
//! loading configuration or requests.

use thiserror::Error;

/// A named policy violation.
///
/// Each variant carries exactly one human-readable message through `Display`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    #[error("New password and confirm password didn't match.")]
    ConfirmationMismatch,

    #[error("New password must not be the same as the current password.")]
    PasswordUnchanged,

    #[error("Minimum password length is {0} characters.")]
    TooShort(usize),

    #[error("Password must contain at least 1 uppercase.")]
    MissingUppercase,

    #[error("Password must contain at least 1 lowercase.")]
    MissingLowercase,

    #[error("Password must contain at least 1 number.")]
    MissingDigit,

    #[error("Password must contain at least 1 special character, such as @, #, $.")]
    MissingSpecialChar,

    #[error("Cannot contain your username")]
    ContainsUsername,

    #[error("Cannot contain your first name")]
    ContainsFirstName,

    #[error("Cannot contain your last name")]
    ContainsLastName,
}

/// Host-level failures outside of policy evaluation
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to load credential change request from {path}: {source}")]
    Request {
        path: String,
        #[source]
        source: config::ConfigError,
    },

    #[error("Usage: {0}")]
    Usage(String),
}
