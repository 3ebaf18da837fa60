//! Policy rules
//!
//! Each rule is an independent check over a request. `Rule::ALL` fixes the
//! evaluation order; callers relying on "the" error message depend on it.

use crate::config::PolicyConfig;
use crate::error::RejectionReason;
use crate::policy::request::CredentialChangeRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    ConfirmationMatches,
    PasswordChanged,
    MinimumLength,
    HasUppercase,
    HasLowercase,
    HasDigit,
    HasSpecialChar,
    ExcludesUsername,
    ExcludesFirstName,
    ExcludesLastName,
}

impl Rule {
    /// All rules in evaluation order
    pub const ALL: [Rule; 10] = [
        Rule::ConfirmationMatches,
        Rule::PasswordChanged,
        Rule::MinimumLength,
        Rule::HasUppercase,
        Rule::HasLowercase,
        Rule::HasDigit,
        Rule::HasSpecialChar,
        Rule::ExcludesUsername,
        Rule::ExcludesFirstName,
        Rule::ExcludesLastName,
    ];

    /// Evaluates the rule, returning the rejection reason when it is violated.
    pub fn check(
        self,
        request: &CredentialChangeRequest,
        config: &PolicyConfig,
    ) -> Result<(), RejectionReason> {
        if self.is_satisfied(request, config) {
            Ok(())
        } else {
            Err(self.reason(config))
        }
    }

    /// The reason reported when this rule is violated
    pub fn reason(self, config: &PolicyConfig) -> RejectionReason {
        match self {
            Rule::ConfirmationMatches => RejectionReason::ConfirmationMismatch,
            Rule::PasswordChanged => RejectionReason::PasswordUnchanged,
            Rule::MinimumLength => RejectionReason::TooShort(config.min_length),
            Rule::HasUppercase => RejectionReason::MissingUppercase,
            Rule::HasLowercase => RejectionReason::MissingLowercase,
            Rule::HasDigit => RejectionReason::MissingDigit,
            Rule::HasSpecialChar => RejectionReason::MissingSpecialChar,
            Rule::ExcludesUsername => RejectionReason::ContainsUsername,
            Rule::ExcludesFirstName => RejectionReason::ContainsFirstName,
            Rule::ExcludesLastName => RejectionReason::ContainsLastName,
        }
    }

    /// One-line description used in the requirements listing
    pub fn describe(self, config: &PolicyConfig) -> String {
        match self {
            Rule::ConfirmationMatches => "Match the confirmation password".to_string(),
            Rule::PasswordChanged => "Differ from the current password".to_string(),
            Rule::MinimumLength => format!("Be at least {} characters long", config.min_length),
            Rule::HasUppercase => "Contain at least one uppercase letter".to_string(),
            Rule::HasLowercase => "Contain at least one lowercase letter".to_string(),
            Rule::HasDigit => "Contain at least one number".to_string(),
            Rule::HasSpecialChar => format!(
                "Contain at least one special character ({})",
                config.special_characters
            ),
            Rule::ExcludesUsername => "Not contain your username".to_string(),
            Rule::ExcludesFirstName => "Not contain your first name".to_string(),
            Rule::ExcludesLastName => "Not contain your last name".to_string(),
        }
    }

    fn is_satisfied(self, request: &CredentialChangeRequest, config: &PolicyConfig) -> bool {
        let password = request.new_password.as_str();

        match self {
            Rule::ConfirmationMatches => password == request.confirm_password,
            Rule::PasswordChanged => password != request.old_password,
            Rule::MinimumLength => password.chars().count() >= config.min_length,
            Rule::HasUppercase => password.chars().any(char::is_uppercase),
            Rule::HasLowercase => password.chars().any(char::is_lowercase),
            Rule::HasDigit => password.chars().any(|c| c.is_ascii_digit()),
            Rule::HasSpecialChar => password.chars().any(|c| config.is_special(c)),
            Rule::ExcludesUsername => !contains_identity(password, &request.username),
            Rule::ExcludesFirstName => !contains_identity(password, &request.first_name),
            Rule::ExcludesLastName => !contains_identity(password, &request.last_name),
        }
    }
}

/// Case-insensitive containment. An empty identity never matches.
fn contains_identity(password: &str, identity: &str) -> bool {
    if identity.is_empty() {
        return false;
    }
    password.to_lowercase().contains(&identity.to_lowercase())
}
