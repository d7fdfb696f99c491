//! Prelude module for convenient imports.
//!
//! Provides a single `use bizobj_rules::prelude::*;` import that brings in
//! the entity contract, the built-in rules and the runner.

// ============================================================================
// FOUNDATION: Core traits, values, errors
// ============================================================================

pub use crate::foundation::{
    ConfigError, ConfigurationError, Entity, Error, LookupError, PropertyMap, PropertySource,
    PropertyValue, Rule, RuleInfo,
};

// ============================================================================
// RULES: Built-in rules and factories
// ============================================================================

pub use crate::rules::{
    LengthMode, LengthRule, PredicateRule, RangeRule, RequiredRule, in_range, length, required,
};

#[cfg(feature = "pattern")]
pub use crate::rules::{PatternRule, pattern};

// ============================================================================
// COMPOSITION AND RUNNING
// ============================================================================

pub use crate::config::ValidatorConfig;
pub use crate::json::JsonEntity;
pub use crate::rule_set::{RuleSet, RuleSetBuilder};
pub use crate::runner::{BrokenRules, Validator, is_valid, validate};

pub use crate::rule;
