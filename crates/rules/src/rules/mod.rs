//! Built-in rules
//!
//! Every built-in rule is property-scoped, resolves its property through
//! [`Rule::resolve`](crate::foundation::Rule::resolve), and is validated at
//! construction: blank property names and impossible parameters are
//! [`ConfigurationError`](crate::foundation::ConfigurationError)s.
//!
//! - [`LengthRule`]: text length within inclusive bounds
//! - [`RequiredRule`]: value present and not blank
//! - [`PatternRule`]: text matches a regular expression
//! - [`RangeRule`]: number within inclusive bounds
//! - [`PredicateRule`]: any closure over the entity
//!
//! New rule kinds implement [`Rule`](crate::foundation::Rule) directly, or
//! use the [`rule!`](crate::rule) macro.

pub mod length;
#[cfg(feature = "pattern")]
pub mod pattern;
pub mod predicate;
pub mod range;
pub mod required;

pub use length::{LengthMode, LengthRule, length};
#[cfg(feature = "pattern")]
pub use pattern::{PatternRule, pattern};
pub use predicate::PredicateRule;
pub use range::{RangeRule, in_range};
pub use required::{RequiredRule, required};
