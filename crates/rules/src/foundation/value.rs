//! Resolved property values
//!
//! Rules never see an entity's concrete field types. A property resolves to
//! a [`PropertyValue`], or to `None` when the property is not set.

use std::fmt;

/// The current value of one entity property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Free text.
    Text(String),
    /// Signed integer.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean flag.
    Boolean(bool),
    /// Ordered collection of values.
    List(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Renders the value as text.
    ///
    /// Lists join their items with `", "`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Returns the text slice if this is a [`PropertyValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a numeric view of the value.
    ///
    /// Text is parsed after trimming; anything else that is not a number
    /// yields `None`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// True for whitespace-only text and empty lists.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Short type label used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::List(_) => "list",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for PropertyValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for PropertyValue {
                fn from(value: $t) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// JSON shapes that have no [`PropertyValue`] counterpart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnsupportedJson {
    /// Nested objects are entities in their own right.
    #[error("json objects are not property values")]
    Object,
    /// A list item was `null`; only a whole value can be absent.
    #[error("json arrays must not contain null")]
    NullItem,
}

impl PropertyValue {
    /// Converts a JSON value; `null` maps to an absent value.
    ///
    /// Conversion is exact or fails. Objects, and arrays holding an object or
    /// a `null` at any depth, are [`UnsupportedJson`]. Numbers that fit
    /// neither `i64` nor `f64` keep their literal text.
    pub fn from_json(value: serde_json::Value) -> Result<Option<Self>, UnsupportedJson> {
        use serde_json::Value;

        Ok(match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Boolean(b)),
            Value::String(s) => Some(Self::Text(s)),
            Value::Number(n) => Some(if let Some(i) = n.as_i64() {
                Self::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Self::Float(f)
            } else {
                Self::Text(n.to_string())
            }),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(Self::from_json(item)?.ok_or(UnsupportedJson::NullItem)?);
                }
                Some(Self::List(out))
            }
            Value::Object(_) => return Err(UnsupportedJson::Object),
        })
    }
}
