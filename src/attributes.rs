//! Read views over model attribute values
//!
//! The validator never owns or mutates model storage. It reads values through
//! the [`AttributeSource`] trait, which is implemented for the ordered
//! [`Attributes`] map provided here as well as for the standard library maps.
//!
//! # Examples
//!
//! ```
//! use sluice::{attrs, AttributeSource, Value};
//!
//! let changed = attrs! { "code" => "123", "description" => Value::Null };
//!
//! assert_eq!(changed.attribute("code"), Some(&Value::from("123")));
//! // An explicit null is still a present key
//! assert!(changed.has_attribute("description"));
//! assert!(!changed.has_attribute("name"));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::value::Value;

/// Read access to a model's current (or proposed) attribute values.
///
/// `attribute` returns `None` when the key is absent. A key that is present
/// but holds [`Value::Null`] returns `Some(&Value::Null)`; partial validation
/// depends on that distinction.
pub trait AttributeSource {
    /// Look up the value stored under `name`.
    fn attribute(&self, name: &str) -> Option<&Value>;

    /// Check whether `name` is present as a key.
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    #[inline]
    fn attribute(&self, name: &str) -> Option<&Value> {
        (**self).attribute(name)
    }
}

impl<S: BuildHasher> AttributeSource for HashMap<String, Value, S> {
    #[inline]
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl AttributeSource for BTreeMap<String, Value> {
    #[inline]
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// An insertion-ordered attribute map.
///
/// Setting an existing key replaces its value in place and keeps its
/// original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    entries: Vec<(String, Value)>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    ///
    /// # Examples
    ///
    /// ```
    /// use sluice::Attributes;
    ///
    /// let attrs = Attributes::new().with("code", "123").with("count", 4);
    /// assert_eq!(attrs.len(), 2);
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or replace a value, returning the previous one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Get the value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Remove `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let idx = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Copy every entry of `other` into this map, replacing existing keys.
    pub fn merge(&mut self, other: Attributes) {
        for (name, value) in other {
            self.set(name, value);
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attribute names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl AttributeSource for Attributes {
    #[inline]
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        attrs.extend(iter);
        attrs
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl IntoIterator for Attributes {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Build an [`Attributes`] map from `name => value` pairs.
///
/// Values go through `Into<Value>`, so string slices, integers, floats,
/// booleans, `Option`s and [`Value`] itself can be mixed freely.
///
/// # Example
///
/// ```rust
/// use sluice::{attrs, Value};
///
/// let attrs = attrs! {
///     "code" => "123",
///     "name" => "1",
///     "description" => Value::Null,
/// };
/// assert_eq!(attrs.len(), 3);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attributes::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attributes::new();
        $(
            attrs.set($name, $value);
        )+
        attrs
    }};
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Attributes;
    use crate::value::Value;

    impl Serialize for Attributes {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (name, value) in self.iter() {
                map.serialize_entry(name, value)?;
            }
            map.end()
        }
    }

    struct AttributesVisitor;

    impl<'de> Visitor<'de> for AttributesVisitor {
        type Value = Attributes;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of attribute names to values")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Attributes, A::Error> {
            let mut attrs = Attributes::new();
            while let Some((name, value)) = access.next_entry::<String, Value>()? {
                attrs.set(name, value);
            }
            Ok(attrs)
        }
    }

    impl<'de> Deserialize<'de> for Attributes {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(AttributesVisitor)
        }
    }
}
