//! Validator configuration
//!
//! [`ValidatorConfig`] controls how a [`Validator`](crate::runner::Validator)
//! obtains rule sets and how much it logs. It deserializes from JSON, reads
//! overrides from the environment, and ships two presets.

use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;

/// Environment variable toggling the rule-set cache.
pub const ENV_CACHE: &str = "BIZOBJ_RULES_CACHE";

/// Environment variable toggling per-rule trace events.
pub const ENV_TRACE: &str = "BIZOBJ_RULES_TRACE";

/// Runtime settings for a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Build each entity type's rule set once and reuse it.
    ///
    /// When off, `create_rules` runs on every validation pass.
    pub cache_rule_sets: bool,

    /// Emit a `trace` event for every rule evaluated.
    pub trace_evaluations: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            cache_rule_sets: true,
            trace_evaluations: false,
        }
    }
}

impl ValidatorConfig {
    /// Development configuration (rebuild rule sets, trace every rule).
    #[must_use]
    pub fn development() -> Self {
        Self {
            cache_rule_sets: false,
            trace_evaluations: true,
        }
    }

    /// Production configuration (cached rule sets, no per-rule events).
    #[must_use]
    pub fn production() -> Self {
        Self::default()
    }

    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|var| std::env::var(var).ok())
    }

    /// Applies overrides from a variable lookup.
    ///
    /// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`, case
    /// insensitively. Unset variables leave the field untouched.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_CACHE) {
            self.cache_rule_sets = parse_flag(ENV_CACHE, &value)?;
        }
        if let Some(value) = lookup(ENV_TRACE) {
            self.trace_evaluations = parse_flag(ENV_TRACE, &value)?;
        }
        Ok(self)
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var,
            value: value.to_owned(),
        }),
    }
}
