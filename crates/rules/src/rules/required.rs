//! Required-value rule

crate::rule! {
    /// Broken when the property is not set, or is blank.
    ///
    /// Text is blank when it is empty or whitespace-only; a list is blank when
    /// it has no items. Numbers and booleans are never blank.
    pub RequiredRule;
    check(value) { value.is_some_and(|v| !v.is_blank()) }
    describe(property) { format!("{property} is required") }
    fn required;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ConfigurationError, LookupError, PropertySource, PropertyValue, Rule};
    use rstest::rstest;

    struct One(Option<PropertyValue>);

    impl PropertySource for One {
        fn type_name(&self) -> &str {
            "One"
        }

        fn property(&self, name: &str) -> Result<Option<PropertyValue>, LookupError> {
            match name {
                "Name" => Ok(self.0.clone()),
                _ => Err(LookupError::unknown("One", name)),
            }
        }
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(PropertyValue::from("")), false)]
    #[case(Some(PropertyValue::from("   ")), false)]
    #[case(Some(PropertyValue::from("x")), true)]
    #[case(Some(PropertyValue::List(Vec::new())), false)]
    #[case(Some(PropertyValue::Integer(0)), true)]
    #[case(Some(PropertyValue::Boolean(false)), true)]
    fn required_values(#[case] value: Option<PropertyValue>, #[case] satisfied: bool) {
        let rule = required("Name").unwrap();
        assert_eq!(rule.evaluate(&One(value)).unwrap(), satisfied);
    }

    #[test]
    fn default_description() {
        assert_eq!(RequiredRule::new(" Name ").unwrap().description(), "Name is required");
    }

    #[test]
    fn blank_property_is_rejected() {
        assert!(matches!(
            RequiredRule::new(""),
            Err(ConfigurationError::BlankPropertyName { rule: "RequiredRule" })
        ));
    }
}
