//! Name-indexed property access
//!
//! Rules address properties by string name. Instead of probing the entity at
//! runtime, every entity type builds a [`PropertyMap`] once: an ordered table
//! from property name to getter. Lookups against that table either resolve to
//! the current value or fail with a [`LookupError`].
//!
//! [`PropertySource`] is the dyn-compatible face of the same capability. Rules
//! only ever see `&dyn PropertySource`, so one rule instance works against any
//! entity shape.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::LazyLock;
//! use bizobj_rules::foundation::{PropertyMap, PropertyValue};
//!
//! struct Customer { name: String, nickname: Option<String> }
//!
//! static CUSTOMER: LazyLock<PropertyMap<Customer>> = LazyLock::new(|| {
//!     PropertyMap::new("Customer")
//!         .data_property("Name", |c: &Customer| Some(c.name.as_str().into()))
//!         .property("Nickname", |c: &Customer| c.nickname.as_deref().map(Into::into))
//! });
//! ```

use std::fmt;
use std::sync::Arc;

use crate::foundation::{LookupError, PropertyValue};

/// Resolves properties by name without static knowledge of the source's shape.
pub trait PropertySource {
    /// Name of the entity type, used in diagnostics.
    fn type_name(&self) -> &str;

    /// Resolves `name` to the property's current value.
    ///
    /// Returns `Ok(None)` when the property exists but is not set, and
    /// [`LookupError`] when no readable property of that name exists.
    fn property(&self, name: &str) -> Result<Option<PropertyValue>, LookupError>;
}

type Getter<E> = Arc<dyn Fn(&E) -> Option<PropertyValue> + Send + Sync>;

enum Access<E> {
    Read(Getter<E>),
    WriteOnly,
}

struct Entry<E> {
    name: &'static str,
    access: Access<E>,
    data: bool,
}

/// Per-type table of named property getters.
///
/// Declaration order is preserved. Registering a name twice replaces the
/// earlier entry in place, which is how a derived type overrides a getter it
/// inherited.
pub struct PropertyMap<E> {
    type_name: &'static str,
    entries: Vec<Entry<E>>,
}

impl<E: 'static> PropertyMap<E> {
    /// Creates an empty table for the named entity type.
    #[must_use]
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            entries: Vec::new(),
        }
    }

    /// Copies every entry of `base`, reading through `project` to reach the
    /// embedded base value.
    ///
    /// The derived type's own properties are declared after this call so that
    /// base properties come first.
    #[must_use]
    pub fn inherit<B, P>(mut self, base: &PropertyMap<B>, project: P) -> Self
    where
        B: 'static,
        P: Fn(&E) -> &B + Send + Sync + 'static,
    {
        let project = Arc::new(project);
        for entry in &base.entries {
            let access = match &entry.access {
                Access::Read(getter) => {
                    let getter = Arc::clone(getter);
                    let project = Arc::clone(&project);
                    Access::Read(Arc::new(move |e: &E| getter(project(e))) as Getter<E>)
                }
                Access::WriteOnly => Access::WriteOnly,
            };
            self.insert(Entry {
                name: entry.name,
                access,
                data: entry.data,
            });
        }
        self
    }

    /// Registers a readable property.
    #[must_use]
    pub fn property<F>(self, name: &'static str, getter: F) -> Self
    where
        F: Fn(&E) -> Option<PropertyValue> + Send + Sync + 'static,
    {
        self.with_entry(name, Access::Read(Arc::new(getter)), false)
    }

    /// Registers a readable property that belongs to the entity's data surface.
    #[must_use]
    pub fn data_property<F>(self, name: &'static str, getter: F) -> Self
    where
        F: Fn(&E) -> Option<PropertyValue> + Send + Sync + 'static,
    {
        self.with_entry(name, Access::Read(Arc::new(getter)), true)
    }

    /// Declares a property that exists but cannot be read.
    #[must_use]
    pub fn write_only(self, name: &'static str) -> Self {
        self.with_entry(name, Access::WriteOnly, false)
    }

    fn with_entry(mut self, name: &'static str, access: Access<E>, data: bool) -> Self {
        self.insert(Entry { name, access, data });
        self
    }

    fn insert(&mut self, entry: Entry<E>) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }
}

impl<E> PropertyMap<E> {
    /// Name of the entity type this table describes.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Resolves `name` against `entity`.
    pub fn get(&self, entity: &E, name: &str) -> Result<Option<PropertyValue>, LookupError> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| LookupError::unknown(self.type_name, name))?;

        match &entry.access {
            Access::Read(getter) => Ok(getter(entity)),
            Access::WriteOnly => Err(LookupError::not_readable(self.type_name, name)),
        }
    }

    /// Returns `true` if a property of that name is declared, readable or not.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Returns `true` if the property is declared and readable.
    #[must_use]
    pub fn is_readable(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.name == name && matches!(e.access, Access::Read(_)))
    }

    /// All declared property names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    /// Names tagged as data properties, in declaration order.
    pub fn data_properties(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().filter(|e| e.data).map(|e| e.name)
    }

    /// Number of declared properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no properties are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> fmt::Debug for PropertyMap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyMap")
            .field("type_name", &self.type_name)
            .field("properties", &self.entries.iter().map(|e| e.name).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Base {
        id: i64,
        secret: String,
    }

    struct Derived {
        base: Base,
        title: Option<String>,
    }

    fn base_map() -> PropertyMap<Base> {
        PropertyMap::new("Base")
            .data_property("Id", |b: &Base| Some(b.id.into()))
            .write_only("Secret")
    }

    fn derived_map(base: &PropertyMap<Base>) -> PropertyMap<Derived> {
        PropertyMap::new("Derived")
            .inherit(base, |d: &Derived| &d.base)
            .data_property("Title", |d: &Derived| d.title.as_deref().map(Into::into))
    }

    fn derived() -> Derived {
        Derived {
            base: Base {
                id: 7,
                secret: "hunter2".into(),
            },
            title: None,
        }
    }

    #[test]
    fn resolves_own_and_inherited_properties() {
        let base = base_map();
        let map = derived_map(&base);
        let entity = derived();

        assert_eq!(map.get(&entity, "Id").unwrap(), Some(PropertyValue::Integer(7)));
        assert_eq!(map.get(&entity, "Title").unwrap(), None);
        assert_eq!(entity.base.secret, "hunter2");
    }

    #[test]
    fn unknown_property_is_an_error() {
        let base = base_map();
        let map = derived_map(&base);

        let err = map.get(&derived(), "Titel").unwrap_err();
        assert_eq!(err, LookupError::unknown("Derived", "Titel"));
    }

    #[test]
    fn write_only_property_is_not_readable() {
        let base = base_map();
        let map = derived_map(&base);

        assert!(map.contains("Secret"));
        assert!(!map.is_readable("Secret"));
        let err = map.get(&derived(), "Secret").unwrap_err();
        assert_eq!(err, LookupError::not_readable("Derived", "Secret"));
    }

    #[test]
    fn declaration_order_and_data_tags() {
        let base = base_map();
        let map = derived_map(&base);

        assert_eq!(map.names().collect::<Vec<_>>(), ["Id", "Secret", "Title"]);
        assert_eq!(map.data_properties().collect::<Vec<_>>(), ["Id", "Title"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn redeclaring_replaces_in_place() {
        let base = base_map();
        let map = PropertyMap::<Derived>::new("Derived")
            .inherit(&base, |d: &Derived| &d.base)
            .property("Id", |_: &Derived| Some(PropertyValue::Integer(-1)));

        assert_eq!(map.names().collect::<Vec<_>>(), ["Id", "Secret"]);
        assert_eq!(map.get(&derived(), "Id").unwrap(), Some(PropertyValue::Integer(-1)));
        assert_eq!(map.data_properties().count(), 0);
    }
}
