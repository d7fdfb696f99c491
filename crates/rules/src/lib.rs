//! # bizobj-rules
//!
//! Business-rule validation for domain entities.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bizobj_rules::prelude::*;
//! use std::sync::LazyLock;
//!
//! struct Customer { name: String, email: Option<String> }
//!
//! static CUSTOMER: LazyLock<PropertyMap<Customer>> = LazyLock::new(|| {
//!     PropertyMap::new("Customer")
//!         .data_property("Name", |c: &Customer| Some(c.name.as_str().into()))
//!         .data_property("Email", |c: &Customer| c.email.as_deref().map(Into::into))
//! });
//!
//! impl Entity for Customer {
//!     fn properties() -> &'static PropertyMap<Self> { &CUSTOMER }
//!
//!     fn create_rules() -> Result<RuleSetBuilder, ConfigurationError> {
//!         Ok(RuleSetBuilder::new()
//!             .rule(length("Name", 1, 50)?)
//!             .rule(required("Email")?))
//!     }
//! }
//!
//! let broken = validate(&customer)?;
//! println!("{}", broken.to_error_string());
//! ```
//!
//! ## Pieces
//!
//! - [`foundation`]: property access, the [`Rule`](foundation::Rule) contract,
//!   the [`Entity`](foundation::Entity) trait and errors
//! - [`rules`]: built-in rules ([`LengthRule`](rules::LengthRule),
//!   [`RequiredRule`](rules::RequiredRule) and friends)
//! - [`rule_set`]: ordered, additive rule collections
//! - [`runner`]: the [`Validator`](runner::Validator) and
//!   [`BrokenRules`](runner::BrokenRules)
//! - [`config`]: [`ValidatorConfig`](config::ValidatorConfig)
//! - [`json`]: validating raw JSON objects
//!
//! New rule kinds are declared with the [`rule!`] macro or by implementing
//! [`Rule`](foundation::Rule) by hand.
//!
//! ## Logging
//!
//! The crate emits `tracing` events and installs no subscriber.

mod macros;

pub mod config;
pub mod foundation;
pub mod json;
pub mod prelude;
pub mod rule_set;
pub mod rules;
pub mod runner;

pub use foundation::Error;
