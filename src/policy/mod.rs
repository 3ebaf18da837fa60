//! Credential policy
//!
//! Validates proposed password changes against an ordered rule set.

pub mod request;
pub mod results;
pub mod rules;
pub mod validator;

pub use request::CredentialChangeRequest;
pub use results::ValidationResult;
pub use rules::Rule;
pub use validator::{CredentialPolicyValidator, validate};
