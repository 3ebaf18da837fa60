//! Credential change requests
//!
//! The plain data a host hands to the validator.

use config::{Config, File};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::error::PolicyError;

/// A proposed password change together with the identity of the account owner.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct CredentialChangeRequest {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl CredentialChangeRequest {
    pub fn new(
        old_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            old_password: old_password.into(),
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Load a request from a TOML (or any `config`-supported) file.
    ///
    /// Every field is required.
    pub fn load(path: &Path) -> Result<Self, PolicyError> {
        let into_err = |source| PolicyError::Request {
            path: path.display().to_string(),
            source,
        };

        Config::builder()
            .add_source(File::from(path))
            .build()
            .and_then(|settings| settings.try_deserialize::<Self>())
            .map_err(into_err)
    }
}

// Passwords never reach logs through Debug.
impl fmt::Debug for CredentialChangeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialChangeRequest")
            .field("old_password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .field("username", &self.username)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}
