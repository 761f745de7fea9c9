//! Key-sorted map type for JSON objects.
//!
//! This module provides [`JsonMap`], a thin wrapper around [`BTreeMap`] that
//! keeps object entries ordered by key. Key ordering is part of the output
//! contract: the serializer emits object entries in sorted order regardless
//! of how the tree was built.
//!
//! ## Why BTreeMap?
//!
//! - **Deterministic output**: entries always serialize in the same order
//! - **Sorted iteration**: `iter()` yields entries in ascending key order
//! - **First-insert-wins**: duplicate keys during parsing keep the first
//!   value, matching [`BTreeMap::entry`] with `or_insert`
//!
//! ## Examples
//!
//! ```rust
//! use json_doc::{JsonMap, Value};
//!
//! let mut map = JsonMap::new();
//! map.insert("b".to_string(), Value::from(2));
//! map.insert("a".to_string(), Value::from(1));
//!
//! // Iteration is by key, not insertion order
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["a", "b"]);
//! ```

use std::collections::{BTreeMap, HashMap};

/// A map of string keys to values, ordered by key.
///
/// # Examples
///
/// ```rust
/// use json_doc::{JsonMap, Value};
///
/// let mut map = JsonMap::new();
/// map.insert("name".to_string(), Value::from("Alice"));
/// map.insert("age".to_string(), Value::from(30));
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("name").and_then(|v| v.as_str().ok()), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonMap(BTreeMap<String, crate::Value>);

impl JsonMap {
    /// Creates an empty `JsonMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_doc::JsonMap;
    ///
    /// let map = JsonMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        JsonMap(BTreeMap::new())
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is replaced and
    /// returned. (The parser does not use this path for duplicates; it keeps
    /// the first occurrence via [`JsonMap::insert_first`].)
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Inserts a key-value pair only if the key is not already present.
    ///
    /// Mirrors the first-occurrence-wins behavior of the parser for
    /// duplicate object keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_doc::{JsonMap, Value};
    ///
    /// let mut map = JsonMap::new();
    /// map.insert_first("k".to_string(), Value::from(1));
    /// map.insert_first("k".to_string(), Value::from(2));
    /// assert_eq!(map.get("k").and_then(|v| v.as_int().ok()), Some(1));
    /// ```
    pub fn insert_first(&mut self, key: String, value: crate::Value) {
        self.0.entry(key).or_insert(value);
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in ascending order.
    pub fn keys(&self) -> std::collections::btree_map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in key order.
    pub fn values(&self) -> std::collections::btree_map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries of the map, in key order.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<BTreeMap<String, crate::Value>> for JsonMap {
    fn from(map: BTreeMap<String, crate::Value>) -> Self {
        JsonMap(map)
    }
}

impl From<HashMap<String, crate::Value>> for JsonMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        JsonMap(map.into_iter().collect())
    }
}

impl IntoIterator for JsonMap {
    type Item = (String, crate::Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for JsonMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        JsonMap(BTreeMap::from_iter(iter))
    }
}
