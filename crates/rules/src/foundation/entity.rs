//! The entity contract
//!
//! An [`Entity`] exposes its properties through a per-type [`PropertyMap`]
//! and its business rules through [`Entity::create_rules`]. A derived entity
//! type embeds its base and extends both: its map inherits the base map, and
//! its `create_rules` starts from the base type's builder and appends.
//!
//! ```rust,ignore
//! impl Entity for Employee {
//!     fn properties() -> &'static PropertyMap<Self> { &EMPLOYEE }
//!
//!     fn create_rules() -> Result<RuleSetBuilder, ConfigurationError> {
//!         Ok(Person::create_rules()?.rule(RequiredRule::new("Department")?))
//!     }
//! }
//! ```

use crate::foundation::{
    ConfigurationError, LookupError, PropertyMap, PropertySource, PropertyValue,
};
use crate::rule_set::{RuleSet, RuleSetBuilder};

/// A domain object subject to validation.
pub trait Entity: Send + Sync + 'static {
    /// The type's property table, built once.
    fn properties() -> &'static PropertyMap<Self>
    where
        Self: Sized;

    /// The type's own rule collection: the base type's rules followed by this
    /// type's additions.
    ///
    /// A type with no rules of its own returns its base type's builder
    /// untouched. Root types without rules keep the default. Invalid rule
    /// parameters surface here as [`ConfigurationError`].
    fn create_rules() -> Result<RuleSetBuilder, ConfigurationError>
    where
        Self: Sized,
    {
        Ok(RuleSetBuilder::new())
    }

    /// Freezes [`create_rules`](Entity::create_rules) into a rule set.
    fn rule_set() -> Result<RuleSet, ConfigurationError>
    where
        Self: Sized,
    {
        Self::create_rules().map(RuleSetBuilder::build)
    }
}

impl<E: Entity> PropertySource for E {
    fn type_name(&self) -> &str {
        E::properties().type_name()
    }

    fn property(&self, name: &str) -> Result<Option<PropertyValue>, LookupError> {
        E::properties().get(self, name)
    }
}
