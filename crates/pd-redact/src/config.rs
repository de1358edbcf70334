//! Redaction configuration.
//!
//! The field set, token, and separator are process-wide configuration:
//! resolved once at startup (defaults, then environment overrides, or a
//! JSON file) and immutable once bound to a logger.

use crate::error::{RedactError, Result};
use crate::fields::SensitiveFieldSet;
use crate::{DEFAULT_REDACTION_TOKEN, DEFAULT_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding a comma-separated sensitive field list.
pub const ENV_FIELDS: &str = "PII_FIELDS";
/// Environment variable overriding the redaction token.
pub const ENV_TOKEN: &str = "PII_REDACTION_TOKEN";
/// Environment variable overriding the pair separator.
pub const ENV_SEPARATOR: &str = "PII_SEPARATOR";

/// Immutable redaction settings bound to a logger at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Field names whose values are replaced.
    #[serde(default)]
    pub fields: SensitiveFieldSet,

    /// Replacement string substituted for every matched value.
    #[serde(default = "default_token")]
    pub token: String,

    /// Delimiter between consecutive `field=value` pairs.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_token() -> String {
    DEFAULT_REDACTION_TOKEN.to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            fields: SensitiveFieldSet::default(),
            token: default_token(),
            separator: default_separator(),
        }
    }
}

impl RedactionConfig {
    /// Build the config from defaults plus environment overrides.
    ///
    /// Reads `PII_FIELDS` (comma-separated), `PII_REDACTION_TOKEN`, and
    /// `PII_SEPARATOR`; unset variables keep their defaults. The result is
    /// validated before being returned, so a bad environment fails startup
    /// instead of silently weakening redaction.
    pub fn from_env() -> Result<Self> {
        let mut config = RedactionConfig::default();

        if let Ok(val) = std::env::var(ENV_FIELDS) {
            config.fields = val
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .collect();
        }
        if let Ok(val) = std::env::var(ENV_TOKEN) {
            config.token = val;
        }
        if let Ok(val) = std::env::var(ENV_SEPARATOR) {
            config.separator = val;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RedactionConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check the invariants the redactor relies on.
    ///
    /// The separator must be non-empty, the token must not contain the
    /// separator (otherwise redacted output would not be a fixed point),
    /// and field names must be plain identifiers.
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(RedactError::Config("separator must not be empty".into()));
        }
        if self.token.contains(&self.separator) {
            return Err(RedactError::Config(format!(
                "token {:?} contains the separator {:?}",
                self.token, self.separator
            )));
        }
        for field in self.fields.iter() {
            if !field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(RedactError::Config(format!(
                    "invalid field name {:?}: expected [A-Za-z0-9_]+",
                    field
                )));
            }
        }
        Ok(())
    }
}
