//! Macros for declaring property-scoped rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: Declare a rule struct, its fallible constructor, its `Rule`
//!   impl and optionally a factory function
//!
//! # Examples
//!
//! ```rust,ignore
//! use bizobj_rules::rule;
//! use bizobj_rules::foundation::PropertyValue;
//!
//! // No parameters besides the property name
//! rule! {
//!     /// The value must be a positive number.
//!     pub Positive;
//!     check(value) { value.and_then(PropertyValue::as_number).is_some_and(|n| n > 0.0) }
//!     describe(property) { format!("{property} must be positive") }
//!     fn positive;
//! }
//!
//! // With parameters
//! rule! {
//!     pub MaxItems { max: usize };
//!     check(self, value) {
//!         !matches!(value, Some(PropertyValue::List(items)) if items.len() > self.max)
//!     }
//!     describe(property) { format!("{property} may hold at most {max} items") }
//!     fn max_items;
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a complete property-scoped rule.
///
/// The generated struct always derives `Debug` and `Clone` and carries a
/// private [`RuleInfo`](crate::foundation::RuleInfo). Its `new` trims the
/// property name and rejects a blank one with
/// [`ConfigurationError::BlankPropertyName`](crate::foundation::ConfigurationError::BlankPropertyName).
///
/// The `check` block sees the resolved value as `Option<&PropertyValue>`
/// (`None` when the property is not set) and yields `true` when the rule is
/// satisfied. A lookup error from resolving the property propagates out of
/// `evaluate` before the block runs.
///
/// The `describe` block builds the default description from the trimmed
/// property name (and, for parameterised rules, the constructor arguments
/// by name). `with_description` overrides it.
///
/// # Variants
///
/// **No parameters**:
/// ```rust,ignore
/// rule! {
///     pub Filled;
///     check(value) { value.is_some() }
///     describe(property) { format!("{property} must be filled") }
///     fn filled;
/// }
/// ```
///
/// **With parameters** (`new(property, params...)`):
/// ```rust,ignore
/// rule! {
///     pub Prefixed { prefix: String };
///     check(self, value) { value.is_none_or(|v| v.to_text().starts_with(&self.prefix)) }
///     describe(property) { format!("{property} must start with {prefix}") }
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: No parameters + factory fn ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        check($value:ident) $check:block
        describe($prop:ident) $describe:block
        fn $factory:ident;
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name;
            check($value) $check
            describe($prop) $describe
        }

        /// Creates the rule for the named property.
        $vis fn $factory(
            property_name: impl AsRef<str>,
        ) -> ::std::result::Result<$name, $crate::foundation::ConfigurationError> {
            $name::new(property_name)
        }
    };

    // ── Variant 1b: No parameters, no factory ────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        check($value:ident) $check:block
        describe($prop:ident) $describe:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            info: $crate::foundation::RuleInfo,
        }

        impl $name {
            /// Creates the rule for the named property.
            pub fn new(
                property_name: impl AsRef<str>,
            ) -> ::std::result::Result<Self, $crate::foundation::ConfigurationError> {
                let $prop: &str = property_name.as_ref().trim();
                if $prop.is_empty() {
                    return Err($crate::foundation::ConfigurationError::BlankPropertyName {
                        rule: stringify!($name),
                    });
                }
                let description: ::std::string::String = $describe.into();
                Ok(Self {
                    info: $crate::foundation::RuleInfo::new($prop, description),
                })
            }

            /// Replaces the default description.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_description(mut self, description: impl Into<::std::string::String>) -> Self {
                self.info = self.info.with_description(description);
                self
            }
        }

        impl $crate::foundation::Rule for $name {
            fn info(&self) -> &$crate::foundation::RuleInfo {
                &self.info
            }

            fn evaluate(
                &self,
                entity: &dyn $crate::foundation::PropertySource,
            ) -> ::std::result::Result<bool, $crate::foundation::LookupError> {
                let resolved = $crate::foundation::Rule::resolve(self, entity)?;
                let $value: ::std::option::Option<&$crate::foundation::PropertyValue> =
                    resolved.as_ref();
                Ok($check)
            }
        }
    };

    // ── Variant 2a: With parameters + factory fn ─────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $value:ident) $check:block
        describe($prop:ident) $describe:block
        fn $factory:ident;
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            check($self_, $value) $check
            describe($prop) $describe
        }

        /// Creates the rule for the named property.
        $vis fn $factory(
            property_name: impl AsRef<str>,
            $($field: $fty),+
        ) -> ::std::result::Result<$name, $crate::foundation::ConfigurationError> {
            $name::new(property_name, $($field),+)
        }
    };

    // ── Variant 2b: With parameters, no factory ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $value:ident) $check:block
        describe($prop:ident) $describe:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            info: $crate::foundation::RuleInfo,
            $(pub $field: $fty,)+
        }

        impl $name {
            /// Creates the rule for the named property.
            pub fn new(
                property_name: impl AsRef<str>,
                $($field: $fty),+
            ) -> ::std::result::Result<Self, $crate::foundation::ConfigurationError> {
                let $prop: &str = property_name.as_ref().trim();
                if $prop.is_empty() {
                    return Err($crate::foundation::ConfigurationError::BlankPropertyName {
                        rule: stringify!($name),
                    });
                }
                let description: ::std::string::String = $describe.into();
                Ok(Self {
                    info: $crate::foundation::RuleInfo::new($prop, description),
                    $($field,)+
                })
            }

            /// Replaces the default description.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_description(mut self, description: impl Into<::std::string::String>) -> Self {
                self.info = self.info.with_description(description);
                self
            }
        }

        impl $crate::foundation::Rule for $name {
            fn info(&self) -> &$crate::foundation::RuleInfo {
                &self.info
            }

            fn evaluate(
                &$self_,
                entity: &dyn $crate::foundation::PropertySource,
            ) -> ::std::result::Result<bool, $crate::foundation::LookupError> {
                let resolved = $crate::foundation::Rule::resolve($self_, entity)?;
                let $value: ::std::option::Option<&$crate::foundation::PropertyValue> =
                    resolved.as_ref();
                Ok($check)
            }
        }
    };
}
