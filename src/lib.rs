pub mod config;
pub mod error;
pub mod policy;
pub mod utils;

pub use crate::config::PolicyConfig;
pub use error::{PolicyError, RejectionReason};
pub use policy::{CredentialChangeRequest, CredentialPolicyValidator, ValidationResult, validate};
