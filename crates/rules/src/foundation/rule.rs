//! The rule contract
//!
//! A [`Rule`] is one business constraint over a single entity instance. It
//! carries a [`RuleInfo`] (property name and description) and an `evaluate`
//! operation that answers "is this rule satisfied?".
//!
//! # Identity
//!
//! Rule identity is textual. Two rules compare equal, and hash identically,
//! iff their descriptions are equal, whatever their property name or
//! evaluation logic. A `HashSet<Arc<dyn Rule>>` therefore holds at most one
//! rule per description.
//!
//! # Examples
//!
//! ```rust,ignore
//! use bizobj_rules::foundation::{LookupError, PropertySource, Rule, RuleInfo};
//!
//! #[derive(Debug)]
//! struct NotAdmin(RuleInfo);
//!
//! impl Rule for NotAdmin {
//!     fn info(&self) -> &RuleInfo { &self.0 }
//!
//!     fn evaluate(&self, entity: &dyn PropertySource) -> Result<bool, LookupError> {
//!         let value = self.resolve(entity)?;
//!         Ok(value.is_none_or(|v| v.to_text() != "admin"))
//!     }
//! }
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::foundation::{LookupError, PropertySource, PropertyValue};

/// Property name and description of a rule.
///
/// Both are fixed once the rule is constructed. The property name is stored
/// trimmed; an empty name marks an entity-level rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleInfo {
    property_name: String,
    description: String,
}

impl RuleInfo {
    /// Creates rule info, trimming the property name.
    pub fn new(property_name: impl AsRef<str>, description: impl Into<String>) -> Self {
        Self {
            property_name: property_name.as_ref().trim().to_owned(),
            description: description.into(),
        }
    }

    /// Info for a rule that is not tied to one property.
    pub fn entity_level(description: impl Into<String>) -> Self {
        Self::new("", description)
    }

    /// Name of the property the rule belongs to; empty for entity-level rules.
    #[must_use]
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// Text shown to the user when the rule is broken.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` if the rule is not tied to one property.
    #[must_use]
    pub fn is_entity_level(&self) -> bool {
        self.property_name.is_empty()
    }

    /// Replaces the description.
    ///
    /// Takes the info by value: once a rule is shared through a rule set its
    /// info is only reachable by reference and cannot change.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// One business constraint and the means to check it.
///
/// Implementations must not mutate shared state in `evaluate`: a rule is
/// shared across threads and evaluated concurrently against different
/// entities.
pub trait Rule: Send + Sync + fmt::Debug {
    /// Property name and description.
    fn info(&self) -> &RuleInfo;

    /// Returns `Ok(true)` when the rule is satisfied by `entity`.
    ///
    /// A [`LookupError`] means the rule is misconfigured for this entity type;
    /// it is never a verdict.
    fn evaluate(&self, entity: &dyn PropertySource) -> Result<bool, LookupError>;

    /// Name of the property the rule belongs to.
    fn property_name(&self) -> &str {
        self.info().property_name()
    }

    /// Text shown to the user when the rule is broken.
    fn description(&self) -> &str {
        self.info().description()
    }

    /// Resolves this rule's own property against `entity`.
    fn resolve(&self, entity: &dyn PropertySource) -> Result<Option<PropertyValue>, LookupError> {
        entity.property(self.property_name())
    }
}

impl fmt::Display for dyn Rule + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl PartialEq for dyn Rule + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.description() == other.description()
    }
}

impl Eq for dyn Rule + '_ {}

impl Hash for dyn Rule + '_ {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.description().hash(state);
    }
}
