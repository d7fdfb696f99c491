//! Closure-backed rules
//!
//! [`PredicateRule`] covers the one-off business rules that do not deserve a
//! type of their own. The closure sees the whole entity, so it can compare
//! several properties or express an entity-level constraint.
//!
//! ```rust,ignore
//! let rule = PredicateRule::entity_level("End date must follow start date", |e| {
//!     let start = e.property("Start")?.and_then(|v| v.as_number());
//!     let end = e.property("End")?.and_then(|v| v.as_number());
//!     Ok(matches!((start, end), (Some(s), Some(e)) if e >= s))
//! });
//! ```

use std::fmt;
use std::sync::Arc;

use crate::foundation::{
    ConfigurationError, LookupError, PropertySource, PropertyValue, Rule, RuleInfo,
};

type Check = Arc<dyn Fn(&dyn PropertySource) -> Result<bool, LookupError> + Send + Sync>;

/// A rule whose check is a closure over the entity.
#[derive(Clone)]
pub struct PredicateRule {
    info: RuleInfo,
    check: Check,
}

impl PredicateRule {
    /// Creates a rule for the named property; an empty name makes it
    /// entity-level.
    pub fn new<F>(property_name: impl AsRef<str>, description: impl Into<String>, check: F) -> Self
    where
        F: Fn(&dyn PropertySource) -> Result<bool, LookupError> + Send + Sync + 'static,
    {
        Self {
            info: RuleInfo::new(property_name, description),
            check: Arc::new(check),
        }
    }

    /// Creates a rule that is not tied to one property.
    pub fn entity_level<F>(description: impl Into<String>, check: F) -> Self
    where
        F: Fn(&dyn PropertySource) -> Result<bool, LookupError> + Send + Sync + 'static,
    {
        Self::new("", description, check)
    }

    /// Creates a rule that checks only the named property's value.
    ///
    /// The property is resolved first, so a misspelled name still surfaces as
    /// a [`LookupError`]. A blank name is rejected here, since the rule has
    /// nothing to resolve.
    pub fn for_value<F>(
        property_name: impl AsRef<str>,
        description: impl Into<String>,
        check: F,
    ) -> Result<Self, ConfigurationError>
    where
        F: Fn(Option<&PropertyValue>) -> bool + Send + Sync + 'static,
    {
        let property = property_name.as_ref().trim().to_owned();
        if property.is_empty() {
            return Err(ConfigurationError::BlankPropertyName {
                rule: "PredicateRule",
            });
        }
        let name = property.clone();
        Ok(Self::new(property, description, move |entity| {
            let value = entity.property(&name)?;
            Ok(check(value.as_ref()))
        }))
    }
}

impl fmt::Debug for PredicateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateRule")
            .field("info", &self.info)
            .field("check", &"<function>")
            .finish()
    }
}

impl Rule for PredicateRule {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn evaluate(&self, entity: &dyn PropertySource) -> Result<bool, LookupError> {
        (self.check)(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Period {
        start: i64,
        end: Option<i64>,
    }

    impl PropertySource for Period {
        fn type_name(&self) -> &str {
            "Period"
        }

        fn property(&self, name: &str) -> Result<Option<PropertyValue>, LookupError> {
            match name {
                "Start" => Ok(Some(self.start.into())),
                "End" => Ok(self.end.map(Into::into)),
                _ => Err(LookupError::unknown("Period", name)),
            }
        }
    }

    fn ordered() -> PredicateRule {
        PredicateRule::entity_level("End must not precede Start", |e| {
            let start = e.property("Start")?.and_then(|v| v.as_number());
            let end = e.property("End")?.and_then(|v| v.as_number());
            Ok(match (start, end) {
                (Some(s), Some(e)) => e >= s,
                _ => true,
            })
        })
    }

    #[test]
    fn entity_level_rule() {
        let rule = ordered();
        assert!(rule.info().is_entity_level());
        assert!(rule.evaluate(&Period { start: 1, end: Some(2) }).unwrap());
        assert!(rule.evaluate(&Period { start: 1, end: None }).unwrap());
        assert!(!rule.evaluate(&Period { start: 3, end: Some(2) }).unwrap());
    }

    #[test]
    fn value_rule() {
        let rule = PredicateRule::for_value("End", "End must be set", |v| v.is_some()).unwrap();
        assert_eq!(rule.property_name(), "End");
        assert!(!rule.evaluate(&Period { start: 1, end: None }).unwrap());
    }

    #[test]
    fn value_rule_propagates_lookup_error() {
        let rule = PredicateRule::for_value("Ende", "End must be set", |v| v.is_some()).unwrap();
        let err = rule.evaluate(&Period { start: 1, end: None }).unwrap_err();
        assert_eq!(err.property(), "Ende");
    }

    #[test]
    fn value_rule_rejects_blank_property() {
        let err = PredicateRule::for_value("   ", "End must be set", |v| v.is_some()).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::BlankPropertyName {
                rule: "PredicateRule"
            }
        ));
    }

    #[test]
    fn debug_hides_closure() {
        let debug = format!("{:?}", ordered());
        assert!(debug.contains("PredicateRule"));
        assert!(debug.contains("<function>"));
    }
}
