//! Ordered field map.
//!
//! [`FieldMap`] wraps an [`IndexMap`] so keys keep the order in which they were
//! first written. Re-inserting an existing key replaces its value in place;
//! the key does not move.
//!
//! Equality ignores order: two maps are equal when they hold the same keys
//! with the same values. Rendering that depends on a fixed order (stamp
//! output, canonical text) uses its own hard-coded key lists.
//!
//! ## Examples
//!
//! ```rust
//! use zero_gravity::{FieldMap, FieldValue};
//!
//! let mut map = FieldMap::new();
//! map.insert("title", "Test");
//! map.insert("indexes", vec!["alpha", "beta"]);
//!
//! assert_eq!(map.get_str("title"), Some("Test"));
//! assert_eq!(map.get_list("indexes").map(|l| l.len()), Some(2));
//! ```

use crate::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An insertion-ordered map of field names to [`FieldValue`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(IndexMap<String, FieldValue>);

impl FieldMap {
    /// Creates an empty `FieldMap`.
    #[must_use]
    pub fn new() -> Self {
        FieldMap(IndexMap::new())
    }

    /// Inserts a field, returning the previous value if the key existed.
    ///
    /// An existing key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zero_gravity::FieldMap;
    ///
    /// let mut map = FieldMap::new();
    /// map.insert("a", "1");
    /// map.insert("b", "2");
    /// assert!(map.insert("a", "3").is_some());
    ///
    /// let keys: Vec<_> = map.keys().map(String::as_str).collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// assert_eq!(map.get_str("a"), Some("3"));
    /// ```
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<FieldValue>
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Returns the value for `key` if it is a scalar.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(FieldValue::as_str)
    }

    /// Returns the value for `key` if it is a list.
    #[must_use]
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).and_then(FieldValue::as_list)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns `true` if `key` exists and its value is non-empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zero_gravity::FieldMap;
    ///
    /// let mut map = FieldMap::new();
    /// map.insert("title", "");
    /// assert!(map.contains_key("title"));
    /// assert!(!map.is_present("title"));
    /// ```
    #[must_use]
    pub fn is_present(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Removes a field, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, FieldValue> {
        self.0.keys()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, FieldValue> {
        self.0.iter()
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, FieldValue);
    type IntoIter = indexmap::map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = indexmap::map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = FieldMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V> Extend<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_order() {
        let a: FieldMap = vec![("x", "1"), ("y", "2")].into_iter().collect();
        let b: FieldMap = vec![("y", "2"), ("x", "1")].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut map: FieldMap = vec![("a", "1"), ("b", "2"), ("c", "3")]
            .into_iter()
            .collect();
        map.remove("b");
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_serializes_as_object() {
        let mut map = FieldMap::new();
        map.insert("title", "T");
        map.insert("tags", vec!["x"]);
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"title":"T","tags":["x"]}"#
        );
    }
}
