//! Credential policy validator
//!
//! Decides whether the new password in a request may replace the old one.
//! Rules run in a fixed order and the first violation wins.

use super::request::CredentialChangeRequest;
use super::results::ValidationResult;
use super::rules::Rule;
use crate::config::PolicyConfig;
use crate::error::RejectionReason;

/// Applies the ordered rule set to credential change requests.
///
/// Holds no mutable state; a single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct CredentialPolicyValidator {
    config: PolicyConfig,
}

impl CredentialPolicyValidator {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the first violated rule, or `Accepted` when none are violated.
    pub fn validate(&self, request: &CredentialChangeRequest) -> ValidationResult {
        Rule::ALL
            .iter()
            .find_map(|rule| rule.check(request, &self.config).err())
            .into()
    }

    /// Returns every violated rule in evaluation order. Empty means accepted.
    pub fn validate_all(&self, request: &CredentialChangeRequest) -> Vec<RejectionReason> {
        Rule::ALL
            .iter()
            .filter_map(|rule| rule.check(request, &self.config).err())
            .collect()
    }

    /// Returns a string describing all password requirements
    pub fn requirements(&self) -> String {
        let mut text = String::from("Password must:");
        for rule in Rule::ALL {
            text.push_str("\n - ");
            text.push_str(&rule.describe(&self.config));
        }
        text
    }
}

/// Validates a request against the default policy.
pub fn validate(request: &CredentialChangeRequest) -> ValidationResult {
    CredentialPolicyValidator::default().validate(request)
}
