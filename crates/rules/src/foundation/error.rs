//! Error types for rule construction and property lookup
//!
//! Two kinds of programmer error exist in the engine, and both are kept
//! apart from the ordinary "some rules are broken" outcome, which is data
//! ([`BrokenRules`](crate::runner::BrokenRules)) rather than an error:
//!
//! - [`ConfigurationError`] is returned when a rule is constructed with
//!   parameters that can never make sense (`min > max`, a blank property
//!   name on a property-scoped rule, an invalid pattern).
//! - [`LookupError`] is returned at evaluation time when a rule names a
//!   property the entity type does not expose, or exposes write-only.
//!
//! Neither is recovered inside the crate. They propagate to the caller who
//! owns the rule definitions.

/// Invalid rule parameters, reported at rule construction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// Length bounds are inverted.
    #[error("invalid length range for `{property}`: min {min} > max {max}")]
    InvalidLengthRange {
        property: String,
        min: usize,
        max: usize,
    },

    /// Numeric bounds are inverted or not comparable.
    #[error("invalid range for `{property}`: min {min} > max {max}")]
    InvalidRange {
        property: String,
        min: f64,
        max: f64,
    },

    /// A property-scoped rule was given a blank property name.
    #[error("{rule} requires a property name")]
    BlankPropertyName { rule: &'static str },

    /// The pattern does not compile.
    #[cfg(feature = "pattern")]
    #[error("invalid pattern for `{property}`")]
    InvalidPattern {
        property: String,
        #[source]
        source: regex::Error,
    },
}

impl ConfigurationError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidLengthRange { .. } => "RULE_INVALID_LENGTH_RANGE",
            Self::InvalidRange { .. } => "RULE_INVALID_RANGE",
            Self::BlankPropertyName { .. } => "RULE_BLANK_PROPERTY",
            #[cfg(feature = "pattern")]
            Self::InvalidPattern { .. } => "RULE_INVALID_PATTERN",
        }
    }
}

/// A rule referenced a property the entity cannot provide.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No property of that name exists on the entity type.
    #[error("property `{property}` not found on `{entity}`")]
    UnknownProperty { entity: String, property: String },

    /// The property exists but cannot be read.
    #[error("property `{property}` on `{entity}` is not readable")]
    NotReadable { entity: String, property: String },
}

impl LookupError {
    /// No property `property` on `entity`.
    pub fn unknown(entity: impl Into<String>, property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            entity: entity.into(),
            property: property.into(),
        }
    }

    /// Property `property` on `entity` cannot be read.
    pub fn not_readable(entity: impl Into<String>, property: impl Into<String>) -> Self {
        Self::NotReadable {
            entity: entity.into(),
            property: property.into(),
        }
    }

    /// Name of the property that failed to resolve.
    #[must_use]
    pub fn property(&self) -> &str {
        match self {
            Self::UnknownProperty { property, .. } | Self::NotReadable { property, .. } => property,
        }
    }

    /// Name of the entity type the lookup ran against.
    #[must_use]
    pub fn entity(&self) -> &str {
        match self {
            Self::UnknownProperty { entity, .. } | Self::NotReadable { entity, .. } => entity,
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownProperty { .. } => "PROPERTY_NOT_FOUND",
            Self::NotReadable { .. } => "PROPERTY_NOT_READABLE",
        }
    }
}

/// Failure to load a [`ValidatorConfig`](crate::config::ValidatorConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document did not deserialize.
    #[error("invalid validator config: {0}")]
    Parse(#[from] serde_json::Error),

    /// An environment variable held a value that is not a boolean.
    #[error("invalid value `{value}` for `{var}`: expected true or false")]
    InvalidEnv { var: &'static str, value: String },
}

/// Umbrella error for callers that want a single type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Lookup(_) => "lookup",
            Self::Config(_) => "config",
        }
    }
}
