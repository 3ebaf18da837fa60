//! Credential Policy - demo host
//!
//! Validates a credential change request loaded from a TOML file and reports
//! the outcome through stdout and the exit code.

use log::info;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use credential_policy::error::handlers::{
    EXIT_ACCEPTED, EXIT_REJECTED, error_to_exit_code, handle_error, result_to_exit_code,
};
use credential_policy::utils::logging::{log_outcome, log_rejection, setup_logging};
use credential_policy::{
    CredentialChangeRequest, CredentialPolicyValidator, PolicyConfig, PolicyError,
    ValidationResult,
};

fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    setup_logging();

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            handle_error(&e);
            ExitCode::from(error_to_exit_code(&e))
        }
    }
}

fn run() -> Result<u8, PolicyError> {
    let path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| PolicyError::Usage("credential-policy <request.toml>".into()))?;

    let config = PolicyConfig::load()?;
    let request = CredentialChangeRequest::load(&path)?;
    info!("Validating password change for user {}", request.username);

    let validator = CredentialPolicyValidator::new(config);
    let policy = validator.config();
    info!(
        "Active policy: min length {}, special characters {:?}, report all: {}",
        policy.min_length, policy.special_characters, policy.report_all
    );

    if policy.report_all {
        let reasons = validator.validate_all(&request);
        if reasons.is_empty() {
            println!("accepted");
            return Ok(EXIT_ACCEPTED);
        }
        for reason in &reasons {
            log_rejection(&request.username, reason);
            println!("{reason}");
        }
        return Ok(EXIT_REJECTED);
    }

    let result = validator.validate(&request);
    log_outcome(&request, &result);
    match result {
        ValidationResult::Accepted => println!("accepted"),
        ValidationResult::Rejected(reason) => println!("{reason}"),
    }
    Ok(result_to_exit_code(&result))
}
