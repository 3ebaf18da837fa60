//! Configuration management for the credential policy
//!
//! Layers built-in defaults, an optional `credential_policy.toml` file and
//! `CREDENTIAL_POLICY_*` environment overrides.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;

/// Minimum number of characters in a new password
pub const DEFAULT_MIN_LENGTH: usize = 14;

/// Characters that satisfy the special character rule
pub const DEFAULT_SPECIAL_CHARACTERS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

const CONFIG_FILE: &str = "credential_policy";
const ENV_PREFIX: &str = "CREDENTIAL_POLICY";

/// Tunable parts of the password policy.
///
/// The defaults are the fixed policy; overriding them is a host decision.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Inclusive lower bound on the character count of the new password
    /// Environment: CREDENTIAL_POLICY_MIN_LENGTH
    pub min_length: usize,

    /// Set of characters accepted by the special character rule
    pub special_characters: String,

    /// Report every violation instead of the first one
    /// Environment: CREDENTIAL_POLICY_REPORT_ALL
    pub report_all: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_string(),
            report_all: false,
        }
    }
}

impl PolicyConfig {
    /// Load configuration from credential_policy.toml (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config = Self::from_settings(settings)?;
        info!(
            "Credential policy loaded (min length {}, report all: {})",
            config.min_length, config.report_all
        );
        Ok(config)
    }

    /// Load configuration from an explicit file with environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading credential policy from {}", path.display());

        let settings = Self::defaults()?
            .add_source(File::from(path))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Self::from_settings(settings)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("min_length", DEFAULT_MIN_LENGTH as i64)?
            .set_default("special_characters", DEFAULT_SPECIAL_CHARACTERS)?
            .set_default("report_all", false)
    }

    fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        let config: PolicyConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length == 0 {
            return Err(ConfigError::Message(
                "min_length must be greater than 0".into(),
            ));
        }

        if self.special_characters.is_empty() {
            return Err(ConfigError::Message(
                "special_characters cannot be empty".into(),
            ));
        }

        Ok(())
    }

    /// Whether `c` counts as a special character
    pub fn is_special(&self, c: char) -> bool {
        self.special_characters.contains(c)
    }
}
