//! Text length rule
//!
//! By default, length is measured in Unicode scalar values (chars). Use
//! [`LengthRule::with_mode`] with [`LengthMode::Bytes`] when the limit is a
//! storage limit rather than a user-visible one.

use crate::foundation::{ConfigurationError, LookupError, PropertySource, Rule, RuleInfo};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// Unit a [`LengthRule`] counts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// UTF-8 encoded size, for column and wire limits.
    Bytes,
    /// Characters as a user sees them typed, one per `char`.
    #[default]
    Chars,
}

impl LengthMode {
    /// Length of `text` in this unit.
    #[must_use]
    pub fn measure(self, text: &str) -> usize {
        if self == Self::Bytes {
            text.len()
        } else {
            text.chars().count()
        }
    }
}

// ============================================================================
// LENGTH RULE
// ============================================================================

/// Broken when the property's text length falls outside `[min, max]`.
///
/// An absent value counts as empty text, so it breaks the rule whenever
/// `min > 0`. Non-text values are measured through their text form.
#[derive(Debug, Clone)]
pub struct LengthRule {
    info: RuleInfo,
    min: usize,
    max: usize,
    mode: LengthMode,
}

impl LengthRule {
    /// Creates a length rule with inclusive bounds.
    ///
    /// Returns an error if `min > max` or the property name is blank.
    pub fn new(
        property_name: impl AsRef<str>,
        min: usize,
        max: usize,
    ) -> Result<Self, ConfigurationError> {
        let property = property_name.as_ref().trim();
        if property.is_empty() {
            return Err(ConfigurationError::BlankPropertyName { rule: "LengthRule" });
        }
        if min > max {
            return Err(ConfigurationError::InvalidLengthRange {
                property: property.to_owned(),
                min,
                max,
            });
        }
        Ok(Self {
            info: RuleInfo::new(property, default_description(property, min, max)),
            min,
            max,
            mode: LengthMode::Chars,
        })
    }

    /// Switches how length is counted.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_mode(mut self, mode: LengthMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the default description.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.info = self.info.with_description(description);
        self
    }

    /// Minimum length (inclusive).
    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    /// Maximum length (inclusive).
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    /// How length is counted.
    #[must_use]
    pub fn mode(&self) -> LengthMode {
        self.mode
    }

    /// Returns `true` if text of this length satisfies the rule.
    #[must_use]
    pub fn accepts_len(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

fn default_description(property: &str, min: usize, max: usize) -> String {
    if min == max {
        format!("{property} must be exactly {max} characters long")
    } else if min == 0 {
        format!("{property} must be at most {max} characters long")
    } else {
        format!("{property} must be between {min} and {max} characters long")
    }
}

impl Rule for LengthRule {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn evaluate(&self, entity: &dyn PropertySource) -> Result<bool, LookupError> {
        let len = match self.resolve(entity)? {
            Some(value) => match value.as_text() {
                Some(text) => self.mode.measure(text),
                None => self.mode.measure(&value.to_text()),
            },
            None => 0,
        };
        Ok(self.accepts_len(len))
    }
}

/// Creates a length rule.
pub fn length(
    property_name: impl AsRef<str>,
    min: usize,
    max: usize,
) -> Result<LengthRule, ConfigurationError> {
    LengthRule::new(property_name, min, max)
}

// ============================================================================
// TESTS
// ============================================================================
