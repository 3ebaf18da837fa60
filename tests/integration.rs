use std::sync::Arc;
use std::thread;

use credential_policy::{
    CredentialChangeRequest, CredentialPolicyValidator, PolicyConfig, RejectionReason,
    ValidationResult, validate,
};

// Helper to build a request whose confirmation matches the new password
fn change(old: &str, new: &str, username: &str, first: &str, last: &str) -> CredentialChangeRequest {
    CredentialChangeRequest::new(old, new, new, username, first, last)
}

const STRONG: [&str; 5] = [
    "Xk9!Tr72@Lm41Q",
    "Correct-Horse-Battery-9",
    "qW3rty_uiop[]ZZ",
    "Zz0~zzzzzzzzzz",
    "ÉtéChaud2024!!x",
];

#[test]
fn test_short_password_scenario() {
    let req = CredentialChangeRequest::new(
        "Whatever123!",
        "Short1!",
        "Short1!",
        "bob",
        "",
        "",
    );
    assert_eq!(
        validate(&req),
        ValidationResult::Rejected(RejectionReason::TooShort(14))
    );
}

#[test]
fn test_confirmation_mismatch_scenario() {
    let req = CredentialChangeRequest::new(
        "Whatever123!",
        "Password1!",
        "Password2!",
        "bob",
        "",
        "",
    );
    assert_eq!(
        validate(&req),
        ValidationResult::Rejected(RejectionReason::ConfirmationMismatch)
    );
}

#[test]
fn test_missing_uppercase_scenario() {
    let req = change("x", "abcdefghijklmn1!", "bob", "", "");
    assert_eq!(
        validate(&req),
        ValidationResult::Rejected(RejectionReason::MissingUppercase)
    );
}

#[test]
fn test_contains_username_scenario() {
    let req = change("x", "Bobpassword123!", "bob", "", "");
    assert_eq!(
        validate(&req),
        ValidationResult::Rejected(RejectionReason::ContainsUsername)
    );
}

#[test]
fn test_accepted_scenario() {
    let req = CredentialChangeRequest::new(
        "Oldpass99!",
        "Xk9!Tr72@Lm41Q",
        "Xk9!Tr72@Lm41Q",
        "alice",
        "jane",
        "doe",
    );
    assert_eq!(validate(&req), ValidationResult::Accepted);
}

#[test]
fn test_strong_passwords_are_accepted() {
    for password in STRONG {
        let req = change("Oldpass99!", password, "alice", "jane", "doe");
        assert_eq!(validate(&req), ValidationResult::Accepted, "{password}");
    }
}

#[test]
fn test_matching_confirmation_never_mismatches() {
    for password in STRONG.iter().chain(["", "a", "Short1!", "bob"].iter()) {
        let req = change("old", password, "bob", "Bob", "Smith");
        assert_ne!(
            validate(&req),
            ValidationResult::Rejected(RejectionReason::ConfirmationMismatch)
        );
    }
}

#[test]
fn test_length_boundary() {
    let fourteen = "Aa1!aaaaaaaaaa";
    let thirteen = "Aa1!aaaaaaaaa";
    assert_eq!(fourteen.chars().count(), 14);
    assert_eq!(thirteen.chars().count(), 13);

    assert_eq!(
        validate(&change("x", fourteen, "", "", "")),
        ValidationResult::Accepted
    );
    assert_eq!(
        validate(&change("x", thirteen, "", "", "")),
        ValidationResult::Rejected(RejectionReason::TooShort(14))
    );
}

#[test]
fn test_empty_identity_never_matches() {
    for password in STRONG {
        let req = change("Oldpass99!", password, "", "", "");
        assert_eq!(validate(&req), ValidationResult::Accepted, "{password}");
    }
}

#[test]
fn test_validate_is_idempotent() {
    let req = change("x", "Bobpassword123!", "bob", "", "");
    let validator = CredentialPolicyValidator::default();
    assert_eq!(validator.validate(&req), validator.validate(&req));
    assert_eq!(validator.validate_all(&req), validator.validate_all(&req));
}

#[test]
fn test_result_propagates_with_question_mark() {
    fn change_password(req: &CredentialChangeRequest) -> Result<(), RejectionReason> {
        validate(req).into_result()?;
        Ok(())
    }

    assert_eq!(
        change_password(&change("x", "Short1!", "", "", "")),
        Err(RejectionReason::TooShort(14))
    );
    assert!(change_password(&change("x", "Xk9!Tr72@Lm41Q", "", "", "")).is_ok());
}

#[test]
fn test_rejection_messages() {
    assert_eq!(
        RejectionReason::TooShort(14).to_string(),
        "Minimum password length is 14 characters."
    );
    assert_eq!(
        RejectionReason::ConfirmationMismatch.to_string(),
        "New password and confirm password didn't match."
    );
    assert_eq!(
        RejectionReason::ContainsUsername.to_string(),
        "Cannot contain your username"
    );
    assert_eq!(
        RejectionReason::ContainsLastName.to_string(),
        "Cannot contain your last name"
    );
    assert_eq!(
        RejectionReason::MissingSpecialChar.to_string(),
        "Password must contain at least 1 special character, such as @, #, $."
    );
}

#[test]
fn test_fraction_and_roman_numeral_are_not_digits() {
    for password in ["Abcdefghijklm½!", "AbcdefghijklmⅫ!"] {
        let req = change("x", password, "", "", "");
        assert_eq!(
            validate(&req),
            ValidationResult::Rejected(RejectionReason::MissingDigit),
            "{password}"
        );
    }
}

#[test]
fn test_shared_validator_across_threads() {
    let validator = Arc::new(CredentialPolicyValidator::new(PolicyConfig::default()));

    let handles: Vec<_> = STRONG
        .iter()
        .map(|password| {
            let validator = Arc::clone(&validator);
            let req = change("Oldpass99!", password, "alice", "jane", "doe");
            thread::spawn(move || validator.validate(&req))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), ValidationResult::Accepted);
    }
}
