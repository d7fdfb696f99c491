//! Validation runner
//!
//! A [`Validator`] evaluates an entity type's rule set against one entity
//! and reports the broken rules in rule-set order. The pass is fail-fast on
//! lookup errors: the first rule that names a property the entity cannot
//! provide aborts the pass and no partial result is returned.
//!
//! ```rust,ignore
//! let broken = Validator::default().validate(&order)?;
//! if !broken.is_valid() {
//!     eprintln!("{}", broken.to_error_string());
//! }
//! ```

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::config::ValidatorConfig;
use crate::foundation::{ConfigurationError, Entity, Error, LookupError, PropertySource, Rule};
use crate::rule_set::RuleSet;

// ============================================================================
// BROKEN RULES
// ============================================================================

/// The rules an entity failed, in rule-set order.
///
/// Duplicates are kept: two rules with the same description both appear if
/// both are broken.
#[derive(Debug, Clone, Default)]
pub struct BrokenRules {
    rules: Vec<Arc<dyn Rule>>,
}

impl BrokenRules {
    /// Returns `true` if no rule was broken.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of broken rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule was broken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates broken rules in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<dyn Rule>> {
        self.rules.iter()
    }

    /// Broken rules scoped to the named property.
    pub fn for_property<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Arc<dyn Rule>> {
        self.rules.iter().filter(move |r| r.property_name() == name)
    }

    /// Descriptions of the broken rules, in order.
    #[must_use]
    pub fn descriptions(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.description()).collect()
    }

    /// All descriptions joined by newlines, for display to a user.
    #[must_use]
    pub fn to_error_string(&self) -> String {
        self.descriptions().join("\n")
    }

    /// Consumes the list, returning the rules.
    #[must_use]
    pub fn into_vec(self) -> Vec<Arc<dyn Rule>> {
        self.rules
    }
}

impl fmt::Display for BrokenRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_error_string())
    }
}

impl<'a> IntoIterator for &'a BrokenRules {
    type Item = &'a Arc<dyn Rule>;
    type IntoIter = std::slice::Iter<'a, Arc<dyn Rule>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(serde::Serialize)]
struct BrokenEntry<'a> {
    property: &'a str,
    description: &'a str,
}

impl Serialize for BrokenRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rules.len()))?;
        for rule in &self.rules {
            seq.serialize_element(&BrokenEntry {
                property: rule.property_name(),
                description: rule.description(),
            })?;
        }
        seq.end()
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Runs rule sets against entities.
///
/// Holds a per-type rule-set cache when
/// [`cache_rule_sets`](ValidatorConfig::cache_rule_sets) is on. A validator
/// is `Send + Sync` and can be shared freely; passes only read the cache.
#[derive(Debug, Default)]
pub struct Validator {
    config: ValidatorConfig,
    cache: RwLock<HashMap<TypeId, RuleSet>>,
}

impl Validator {
    /// Creates a validator with the given configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The rule set for `E`, from the cache or freshly built.
    ///
    /// Construction errors are returned and never cached, so a later call
    /// retries.
    pub fn rule_set<E: Entity>(&self) -> Result<RuleSet, ConfigurationError> {
        if !self.config.cache_rule_sets {
            return E::rule_set();
        }

        let key = TypeId::of::<E>();
        if let Some(set) = self.cache.read().get(&key) {
            return Ok(set.clone());
        }

        let built = E::rule_set()?;
        let mut cache = self.cache.write();
        // Another thread may have filled the slot meanwhile; keep the first.
        let set = cache.entry(key).or_insert_with(|| {
            tracing::debug!(
                entity = type_name::<E>(),
                rules = built.len(),
                "rule set cached"
            );
            built
        });
        Ok(set.clone())
    }

    /// Drops every cached rule set.
    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }

    /// Number of entity types with a cached rule set.
    #[must_use]
    pub fn cached_types(&self) -> usize {
        self.cache.read().len()
    }

    /// Validates `entity` against its type's rule set.
    pub fn validate<E: Entity>(&self, entity: &E) -> Result<BrokenRules, Error> {
        let rules = self.rule_set::<E>()?;
        Ok(self.validate_with(&rules, entity)?)
    }

    /// Returns `true` if `entity` breaks none of its type's rules.
    pub fn is_valid<E: Entity>(&self, entity: &E) -> Result<bool, Error> {
        self.validate(entity).map(|broken| broken.is_valid())
    }

    /// Evaluates `rules` in order against `source`.
    ///
    /// The first [`LookupError`] aborts the pass.
    pub fn validate_with(
        &self,
        rules: &RuleSet,
        source: &dyn PropertySource,
    ) -> Result<BrokenRules, LookupError> {
        let mut broken = BrokenRules::default();

        for rule in rules {
            let satisfied = match rule.evaluate(source) {
                Ok(satisfied) => satisfied,
                Err(err) => {
                    tracing::warn!(
                        entity = source.type_name(),
                        rule = rule.description(),
                        error = %err,
                        "validation aborted"
                    );
                    return Err(err);
                }
            };

            if self.config.trace_evaluations {
                tracing::trace!(
                    entity = source.type_name(),
                    property = rule.property_name(),
                    rule = rule.description(),
                    satisfied,
                    "rule evaluated"
                );
            }

            if !satisfied {
                broken.rules.push(Arc::clone(rule));
            }
        }

        tracing::debug!(
            entity = source.type_name(),
            rules = rules.len(),
            broken = broken.len(),
            "validation pass complete"
        );
        Ok(broken)
    }
}

static DEFAULT_VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::default);

/// Validates `entity` with a shared, default-configured validator.
pub fn validate<E: Entity>(entity: &E) -> Result<BrokenRules, Error> {
    DEFAULT_VALIDATOR.validate(entity)
}

/// Returns `true` if `entity` breaks none of its type's rules.
pub fn is_valid<E: Entity>(entity: &E) -> Result<bool, Error> {
    DEFAULT_VALIDATOR.is_valid(entity)
}
