//! JSON-backed entities
//!
//! [`JsonEntity`] lets a [`RuleSet`](crate::rule_set::RuleSet) validate a
//! JSON object directly, for payloads that never become a Rust struct.
//!
//! # Examples
//!
//! ```rust,ignore
//! use bizobj_rules::json::JsonEntity;
//! use serde_json::json;
//!
//! let order = JsonEntity::from_value("Order", json!({ "Reference": "A-1", "Note": null }))
//!     .expect("an object")
//!     .declare(["Reference", "Note", "Discount"]);
//!
//! let broken = Validator::default().validate_with(&rules, &order)?;
//! ```
//!
//! Keys map to properties as follows:
//!
//! - a present key resolves through [`PropertyValue::from_json`]; `null` is
//!   an absent value
//! - values [`PropertyValue::from_json`] rejects (objects, arrays holding an
//!   object or a `null`) resolve to their compact JSON text, so they are
//!   present and never blank
//! - a missing key is [`LookupError::UnknownProperty`], unless the entity
//!   declares its keys and the key is declared, in which case it is absent

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::foundation::{LookupError, PropertySource, PropertyValue};

/// A JSON object viewed as an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonEntity {
    type_name: String,
    fields: Map<String, Value>,
    declared: Option<BTreeSet<String>>,
}

impl JsonEntity {
    /// Wraps `fields` under the given entity type name.
    pub fn new(type_name: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            type_name: type_name.into(),
            fields,
            declared: None,
        }
    }

    /// Wraps a JSON value; returns `None` unless it is an object.
    pub fn from_value(type_name: impl Into<String>, value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self::new(type_name, fields)),
            _ => None,
        }
    }

    /// Restricts the entity to a fixed set of property names.
    ///
    /// Declared keys missing from the object resolve as absent. Keys outside
    /// the declaration are unknown even when the object carries them.
    #[must_use]
    pub fn declare<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Returns `true` if `name` is a property of this entity.
    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        match &self.declared {
            Some(declared) => declared.contains(name),
            None => self.fields.contains_key(name),
        }
    }

    /// The raw JSON behind a property.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The wrapped object.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Unwraps the JSON object.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl PropertySource for JsonEntity {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn property(&self, name: &str) -> Result<Option<PropertyValue>, LookupError> {
        if !self.has_property(name) {
            return Err(LookupError::unknown(&self.type_name, name));
        }
        let Some(value) = self.fields.get(name) else {
            return Ok(None);
        };
        Ok(PropertyValue::from_json(value.clone())
            .unwrap_or_else(|_| Some(PropertyValue::Text(value.to_string()))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order() -> JsonEntity {
        JsonEntity::from_value(
            "Order",
            json!({
                "Reference": "A-1",
                "Quantity": 3,
                "Note": null,
                "Customer": { "Name": "Ada" },
                "Lines": [null],
            }),
        )
        .unwrap()
    }

    #[test]
    fn resolves_values() {
        let order = order();
        assert_eq!(order.type_name(), "Order");
        assert_eq!(order.property("Reference").unwrap(), Some("A-1".into()));
        assert_eq!(order.property("Quantity").unwrap(), Some(3.into()));
        assert_eq!(order.property("Note").unwrap(), None);
    }

    #[test]
    fn nested_object_resolves_to_json_text() {
        let value = order().property("Customer").unwrap().unwrap();
        assert_eq!(value.as_text(), Some(r#"{"Name":"Ada"}"#));
    }

    #[test]
    fn array_with_null_stays_present() {
        let value = order().property("Lines").unwrap().unwrap();
        assert_eq!(value.as_text(), Some("[null]"));
        assert!(!value.is_blank());
    }

    #[test]
    fn missing_key_is_unknown() {
        let err = order().property("Discount").unwrap_err();
        assert_eq!(err, LookupError::unknown("Order", "Discount"));
    }

    #[test]
    fn declared_keys() {
        let order = order().declare(["Reference", "Discount"]);
        assert_eq!(order.property("Discount").unwrap(), None);
        assert!(order.property("Quantity").is_err());
        assert!(order.has_property("Reference"));
        assert_eq!(order.raw("Quantity"), Some(&json!(3)));
    }

    #[test]
    fn non_objects_are_rejected() {
        assert!(JsonEntity::from_value("Order", json!([1, 2])).is_none());
        assert!(JsonEntity::new("Order", Map::new()).fields().is_empty());
    }
}
