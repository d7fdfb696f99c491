//! Core rule types and traits
//!
//! This module contains the building blocks every other part of the crate
//! is written against:
//!
//! - **Values**: [`PropertyValue`], the resolved value of one property
//! - **Access**: [`PropertySource`], [`PropertyMap`]
//! - **Rules**: [`Rule`], [`RuleInfo`]
//! - **Entities**: [`Entity`]
//! - **Errors**: [`ConfigurationError`], [`LookupError`], [`ConfigError`], [`Error`]
//!
//! # Architecture
//!
//! ## 1. Rules address properties by name
//!
//! A rule is written once and applied to any entity that exposes the named
//! property. Entities opt in by building a [`PropertyMap`], a table of
//! getters, instead of being inspected at runtime:
//!
//! ```rust,ignore
//! let rule = LengthRule::new("Name", 1, 50)?;
//! assert!(rule.evaluate(&customer)?);
//! ```
//!
//! ## 2. Broken is data, misconfigured is an error
//!
//! `evaluate` returns `Ok(false)` for a broken rule. `Err(LookupError)` is
//! reserved for rules that name a property the entity does not have; that
//! error is never read as a verdict.
//!
//! ## 3. Identity is the description
//!
//! `dyn Rule` implements `Eq`, `Hash` and `Display` through its description,
//! so rules key maps and sets by the text the user sees.

pub mod accessor;
pub mod entity;
pub mod error;
pub mod rule;
pub mod value;

pub use accessor::{PropertyMap, PropertySource};
pub use entity::Entity;
pub use error::{ConfigError, ConfigurationError, Error, LookupError};
pub use rule::{Rule, RuleInfo};
pub use value::{PropertyValue, UnsupportedJson};

// ============================================================================
// UTILITIES
// ============================================================================

/// Evaluates a single rule against a property source.
///
/// # Examples
///
/// ```rust,ignore
/// use bizobj_rules::foundation::evaluate;
///
/// let satisfied = evaluate(&RequiredRule::new("Name")?, &customer)?;
/// ```
pub fn evaluate<R>(rule: &R, source: &dyn PropertySource) -> Result<bool, LookupError>
where
    R: Rule + ?Sized,
{
    rule.evaluate(source)
}

/// Evaluates every rule and reports whether all are satisfied.
///
/// Stops at the first broken rule. A lookup error from any rule evaluated
/// before that point propagates.
pub fn satisfies_all(
    rules: &[&dyn Rule],
    source: &dyn PropertySource,
) -> Result<bool, LookupError> {
    for rule in rules {
        if !rule.evaluate(source)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Evaluates rules until one is satisfied.
pub fn satisfies_any(
    rules: &[&dyn Rule],
    source: &dyn PropertySource,
) -> Result<bool, LookupError> {
    for rule in rules {
        if rule.evaluate(source)? {
            return Ok(true);
        }
    }
    Ok(false)
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Result of evaluating one rule.
pub type EvaluationResult = Result<bool, LookupError>;

// ============================================================================
// TESTS
// ============================================================================
