//! Regular-expression rule

use regex::Regex;

use crate::foundation::{ConfigurationError, LookupError, PropertySource, Rule, RuleInfo};

/// Broken when a non-empty text value does not match the pattern.
///
/// Absent and empty values satisfy the rule; combine with
/// [`RequiredRule`](crate::rules::RequiredRule) to demand a value. The
/// pattern is not anchored implicitly, so use `^...$` for full matches.
#[derive(Debug, Clone)]
pub struct PatternRule {
    info: RuleInfo,
    pattern: Regex,
}

impl PatternRule {
    /// Compiles `pattern` for the named property.
    pub fn new(property_name: impl AsRef<str>, pattern: &str) -> Result<Self, ConfigurationError> {
        let property = property_name.as_ref().trim();
        if property.is_empty() {
            return Err(ConfigurationError::BlankPropertyName {
                rule: "PatternRule",
            });
        }
        let pattern = Regex::new(pattern).map_err(|source| ConfigurationError::InvalidPattern {
            property: property.to_owned(),
            source,
        })?;
        Ok(Self {
            info: RuleInfo::new(property, format!("{property} has an invalid format")),
            pattern,
        })
    }

    /// Replaces the default description.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.info = self.info.with_description(description);
        self
    }

    /// The compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl Rule for PatternRule {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn evaluate(&self, entity: &dyn PropertySource) -> Result<bool, LookupError> {
        let Some(value) = self.resolve(entity)? else {
            return Ok(true);
        };
        let text = value.to_text();
        Ok(text.is_empty() || self.pattern.is_match(&text))
    }
}

/// Creates a pattern rule.
pub fn pattern(
    property_name: impl AsRef<str>,
    pattern: &str,
) -> Result<PatternRule, ConfigurationError> {
    PatternRule::new(property_name, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::PropertyValue;

    struct Code(Option<PropertyValue>);

    impl PropertySource for Code {
        fn type_name(&self) -> &str {
            "Code"
        }

        fn property(&self, name: &str) -> Result<Option<PropertyValue>, LookupError> {
            match name {
                "Code" => Ok(self.0.clone()),
                _ => Err(LookupError::unknown("Code", name)),
            }
        }
    }

    #[test]
    fn matches_and_mismatches() {
        let rule = pattern("Code", r"^[A-Z]{3}-\d{2}$").unwrap();
        assert!(rule.evaluate(&Code(Some("ABC-12".into()))).unwrap());
        assert!(!rule.evaluate(&Code(Some("abc-12".into()))).unwrap());
        assert!(!rule.evaluate(&Code(Some(12.into()))).unwrap());
    }

    #[test]
    fn absent_and_empty_are_satisfied() {
        let rule = pattern("Code", r"^\d+$").unwrap();
        assert!(rule.evaluate(&Code(None)).unwrap());
        assert!(rule.evaluate(&Code(Some("".into()))).unwrap());
        assert!(rule.evaluate(&Code(Some(42.into()))).unwrap());
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = PatternRule::new("Code", "([a-z").unwrap_err();
        assert_eq!(err.code(), "RULE_INVALID_PATTERN");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn description() {
        let rule = pattern("Code", ".").unwrap();
        assert_eq!(rule.description(), "Code has an invalid format");
        let rule = rule.with_description("Use the form ABC-12");
        assert_eq!(rule.description(), "Use the form ABC-12");
        assert_eq!(rule.pattern().as_str(), ".");
    }
}
