//! Numeric range rule

use crate::foundation::{ConfigurationError, LookupError, PropertySource, Rule, RuleInfo};

/// Broken when a present value is not a number within `[min, max]`.
///
/// Integers and floats are compared directly and numeric text is parsed.
/// Anything else that is present (booleans, lists, non-numeric text) breaks
/// the rule. An absent value satisfies it.
#[derive(Debug, Clone)]
pub struct RangeRule {
    info: RuleInfo,
    min: f64,
    max: f64,
}

impl RangeRule {
    /// Creates a range rule with inclusive bounds.
    ///
    /// Returns an error if `min > max`, either bound is NaN, or the property
    /// name is blank.
    pub fn new(
        property_name: impl AsRef<str>,
        min: impl Into<f64>,
        max: impl Into<f64>,
    ) -> Result<Self, ConfigurationError> {
        let (min, max) = (min.into(), max.into());
        let property = property_name.as_ref().trim();
        if property.is_empty() {
            return Err(ConfigurationError::BlankPropertyName { rule: "RangeRule" });
        }
        if min.is_nan() || max.is_nan() || min > max {
            return Err(ConfigurationError::InvalidRange {
                property: property.to_owned(),
                min,
                max,
            });
        }
        Ok(Self {
            info: RuleInfo::new(property, format!("{property} must be between {min} and {max}")),
            min,
            max,
        })
    }

    /// Replaces the default description.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.info = self.info.with_description(description);
        self
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Rule for RangeRule {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn evaluate(&self, entity: &dyn PropertySource) -> Result<bool, LookupError> {
        Ok(match self.resolve(entity)? {
            None => true,
            Some(value) => value
                .as_number()
                .is_some_and(|n| (self.min..=self.max).contains(&n)),
        })
    }
}

/// Creates a range rule.
pub fn in_range(
    property_name: impl AsRef<str>,
    min: impl Into<f64>,
    max: impl Into<f64>,
) -> Result<RangeRule, ConfigurationError> {
    RangeRule::new(property_name, min, max)
}
