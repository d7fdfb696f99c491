//! Rule sets and their composition
//!
//! A [`RuleSetBuilder`] collects rules in order and can only append. An
//! entity type's [`create_rules`](crate::foundation::Entity::create_rules)
//! starts from its base type's builder, so a derived type's rule set is
//! always the base type's rules followed by its own, in that order.
//!
//! [`RuleSet`] is the frozen result: an immutable, cheaply clonable snapshot
//! shared by every validation pass.

use std::fmt;
use std::sync::Arc;

use crate::foundation::Rule;

// ============================================================================
// BUILDER
// ============================================================================

/// Append-only, ordered collection of rules under construction.
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<Arc<dyn Rule>>,
}

impl RuleSetBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Appends an already shared rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule_arc(mut self, rule: Arc<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends every rule of `other`, preserving its order.
    #[must_use = "builder methods must be chained or built"]
    pub fn extend_from(mut self, other: &RuleSet) -> Self {
        self.rules.extend(other.iter().cloned());
        self
    }

    /// Appends a rule in place, for builders assembled in a loop.
    pub fn push<R: Rule + 'static>(&mut self, rule: R) {
        self.rules.push(Arc::new(rule));
    }

    /// Number of rules collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Freezes the collected rules.
    #[must_use]
    pub fn build(self) -> RuleSet {
        RuleSet {
            rules: self.rules.into(),
        }
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Immutable, ordered rule collection for one entity type.
///
/// Clones share the same backing slice. Equality compares rules pairwise in
/// order by their textual identity.
#[derive(Clone)]
pub struct RuleSet {
    rules: Arc<[Arc<dyn Rule>]>,
}

impl RuleSet {
    /// An empty rule set.
    #[must_use]
    pub fn empty() -> Self {
        RuleSetBuilder::new().build()
    }

    /// Iterates rules in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<dyn Rule>> {
        self.rules.iter()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<dyn Rule>> {
        self.rules.get(index)
    }

    /// Rules scoped to the named property, in order.
    pub fn for_property<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Arc<dyn Rule>> {
        self.rules.iter().filter(move |r| r.property_name() == name)
    }

    /// Descriptions of every rule, in order.
    #[must_use]
    pub fn descriptions(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.description()).collect()
    }

    /// Returns `true` if `other` begins with exactly this set's rules.
    #[must_use]
    pub fn is_prefix_of(&self, other: &RuleSet) -> bool {
        other.len() >= self.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }

    /// Returns `true` if both sets share the same backing slice.
    #[must_use]
    pub fn ptr_eq(&self, other: &RuleSet) -> bool {
        Arc::ptr_eq(&self.rules, &other.rules)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for RuleSet {
    fn eq(&self, other: &Self) -> bool {
        self.rules[..] == other.rules[..]
    }
}

impl Eq for RuleSet {}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.descriptions()).finish()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Arc<dyn Rule>;
    type IntoIter = std::slice::Iter<'a, Arc<dyn Rule>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<RuleSetBuilder> for RuleSet {
    fn from(builder: RuleSetBuilder) -> Self {
        builder.build()
    }
}
