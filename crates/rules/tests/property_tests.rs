//! Property-based tests for bizobj-rules.

use bizobj_rules::prelude::*;
use proptest::prelude::*;

// ============================================================================
// FIXTURES
// ============================================================================

/// A source with one text property per generated value, named `P0`, `P1`, ...
struct Row(Vec<Option<String>>);

impl PropertySource for Row {
    fn type_name(&self) -> &str {
        "Row"
    }

    fn property(&self, name: &str) -> Result<Option<PropertyValue>, LookupError> {
        name.strip_prefix('P')
            .and_then(|i| i.parse::<usize>().ok())
            .and_then(|i| self.0.get(i))
            .map(|v| v.as_deref().map(PropertyValue::from))
            .ok_or_else(|| LookupError::unknown("Row", name))
    }
}

#[derive(Debug, Clone)]
enum Kind {
    Length(usize, usize),
    Required,
}

fn kind() -> impl Strategy<Value = Kind> {
    prop_oneof![
        (0usize..6, 0usize..6).prop_map(|(a, b)| Kind::Length(a.min(b), a.max(b))),
        Just(Kind::Required),
    ]
}

fn build(kinds: &[(usize, Kind)]) -> RuleSet {
    let mut builder = RuleSetBuilder::new();
    for (i, (column, kind)) in kinds.iter().enumerate() {
        let property = format!("P{column}");
        match kind {
            Kind::Length(min, max) => {
                let rule = length(&property, *min, *max).unwrap();
                builder.push(rule.with_description(format!("#{i} length")));
            }
            Kind::Required => {
                let rule = required(&property).unwrap();
                builder.push(rule.with_description(format!("#{i} required")));
            }
        }
    }
    builder.build()
}

fn row() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::of("[a-z ]{0,8}"), 4)
}

fn rules() -> impl Strategy<Value = Vec<(usize, Kind)>> {
    prop::collection::vec((0usize..4, kind()), 0..8)
}

// ============================================================================
// RUNNER: broken = [r in rules | !r.evaluate(e)], in order
// ============================================================================

proptest! {
    #[test]
    fn broken_rules_are_the_ordered_failures(values in row(), kinds in rules()) {
        let entity = Row(values);
        let set = build(&kinds);

        let broken = Validator::default().validate_with(&set, &entity).unwrap();

        let expected: Vec<&str> = set
            .iter()
            .filter(|r| !r.evaluate(&entity).unwrap())
            .map(|r| r.description())
            .collect();
        prop_assert_eq!(broken.descriptions(), expected);
    }

    #[test]
    fn validation_is_idempotent(values in row(), kinds in rules()) {
        let entity = Row(values);
        let set = build(&kinds);
        let validator = Validator::default();

        let first = validator.validate_with(&set, &entity).unwrap();
        let second = validator.validate_with(&set, &entity).unwrap();
        prop_assert_eq!(first.descriptions(), second.descriptions());
    }

    #[test]
    fn additive_builder_keeps_prefix(base in rules(), extra in rules()) {
        let base_set = build(&base);
        let mut all = base.clone();
        all.extend(extra.iter().cloned());

        // shared prefix gets the same indices, hence the same descriptions
        let derived = build(&all);
        prop_assert!(base_set.is_prefix_of(&derived));
        prop_assert_eq!(derived.len(), base.len() + extra.len());
    }
}

// ============================================================================
// BUILT-IN RULES
// ============================================================================

proptest! {
    #[test]
    fn length_accepts_exactly_the_bounded_lengths(s in "\\PC{0,12}", min in 0usize..6, span in 0usize..6) {
        let max = min + span;
        let rule = length("P0", min, max).unwrap();
        let len = s.chars().count();

        let satisfied = rule.evaluate(&Row(vec![Some(s)])).unwrap();
        prop_assert_eq!(satisfied, (min..=max).contains(&len));
    }

    #[test]
    fn required_breaks_on_blank_text(s in "[ \\t]{0,6}") {
        let rule = required("P0").unwrap();
        prop_assert!(!rule.evaluate(&Row(vec![Some(s)])).unwrap());
    }

    #[test]
    fn required_accepts_text_with_content(s in "[ ]{0,3}[a-z]{1,5}[ ]{0,3}") {
        let rule = required("P0").unwrap();
        prop_assert!(rule.evaluate(&Row(vec![Some(s)])).unwrap());
    }

    #[test]
    fn lookup_errors_are_never_verdicts(values in row(), column in 4usize..10) {
        let set = RuleSetBuilder::new()
            .rule(required("P0").unwrap())
            .rule(required(format!("P{column}")).unwrap())
            .build();

        let err = Validator::default().validate_with(&set, &Row(values)).unwrap_err();
        prop_assert_eq!(err.property(), format!("P{column}"));
    }
}
