//! The JSON value tree.
//!
//! This module provides the [`Value`] enum, a closed tagged union over the
//! seven JSON shapes. Every other component of the crate operates on it:
//! the parser builds one, the serializer walks one, and consumers read one
//! through the typed accessors.
//!
//! ## Core Types
//!
//! - [`Value`]: any JSON value (null, bool, int, double, string, array, object)
//! - [`JsonMap`]: the key-sorted object payload
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use json_doc::Value;
//!
//! // From primitives
//! let null = Value::Null;
//! let flag = Value::from(true);
//! let count = Value::from(42);
//! let text = Value::from("hello");
//!
//! // Using the json! macro
//! use json_doc::json;
//! let obj = json!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use json_doc::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_int());
//! assert!(value.is_double());        // int is double-like
//! assert!(!value.is_pure_double());
//! ```
//!
//! ### Extracting Payloads
//!
//! ```rust
//! use json_doc::Value;
//!
//! let value = Value::from(42);
//! assert_eq!(value.as_int().unwrap(), 42);
//! assert_eq!(value.as_double().unwrap(), 42.0);   // promoted
//! assert!(value.as_str().is_err());               // TypeError
//! ```
//!
//! ## The int/double split
//!
//! A numeric literal with no fractional part and no exponent whose
//! magnitude fits `i32` is an [`Value::Int`]; every other numeric literal
//! is a [`Value::Double`]. The distinction is observable and round-trips:
//! integers print without a decimal point, doubles always carry one (or an
//! exponent).

use crate::error::TypeError;
use crate::JsonMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed JSON value.
///
/// The tree is acyclic and single-owner by construction: each array and
/// object owns its children directly, so teardown is ordinary ownership-tree
/// drop and no reference counting is involved.
///
/// # Examples
///
/// ```rust
/// use json_doc::Value;
///
/// let null = Value::Null;
/// let num = Value::Int(42);
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_int());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i32),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    Object(JsonMap),
}

impl Value {
    /// Returns the name of the active tag, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Returns `true` if the value is null.
    ///
    /// Quirk, preserved for compatibility: this is *also* true when the
    /// value is a string whose content is exactly `null`. The alias lives
    /// only in this predicate; accessors and the serializer dispatch on
    /// the actual tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_doc::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(Value::String("null".to_string()).is_null());
    /// assert!(!Value::String("nil".to_string()).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s == "null",
            _ => false,
        }
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if the value is numeric: a double or an int.
    ///
    /// Ints are treated as a subset of "double-like"; [`Value::as_double`]
    /// promotes them.
    #[inline]
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Value::Double(_) | Value::Int(_))
    }

    /// Returns `true` only if the value is a double, not an int.
    #[inline]
    #[must_use]
    pub const fn is_pure_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean payload.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeError`] if the value is not a boolean.
    pub fn as_bool(&self) -> Result<bool, TypeError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(TypeError::new("bool", other.type_name())),
        }
    }

    /// Returns the integer payload.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeError`] if the value is not an int. A double is not
    /// narrowed; use [`Value::as_double`] for the promoting direction.
    pub fn as_int(&self) -> Result<i32, TypeError> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(TypeError::new("int", other.type_name())),
        }
    }

    /// Returns the numeric payload as `f64`, promoting an int.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_doc::Value;
    ///
    /// assert_eq!(Value::Double(1.5).as_double().unwrap(), 1.5);
    /// assert_eq!(Value::Int(3).as_double().unwrap(), 3.0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`TypeError`] if the value is neither a double nor an int.
    pub fn as_double(&self) -> Result<f64, TypeError> {
        match self {
            Value::Double(d) => Ok(*d),
            Value::Int(i) => Ok(f64::from(*i)),
            other => Err(TypeError::new("double", other.type_name())),
        }
    }

    /// Returns the string payload.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeError`] if the value is not a string.
    pub fn as_str(&self) -> Result<&str, TypeError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(TypeError::new("string", other.type_name())),
        }
    }

    /// Returns the array payload.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeError`] if the value is not an array.
    pub fn as_array(&self) -> Result<&[Value], TypeError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(TypeError::new("array", other.type_name())),
        }
    }

    /// Returns the object payload.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeError`] if the value is not an object.
    pub fn as_map(&self) -> Result<&JsonMap, TypeError> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(TypeError::new("object", other.type_name())),
        }
    }
}

/// Formats the value exactly as the serializer emits it.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        crate::ser::write_value(&mut out, self);
        f.write_str(&out)
    }
}

// From conversions for the primitives that fit the model losslessly.
// i64/u32/u64 are deliberately absent: Int is exactly 32-bit signed.

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(i32::from(value))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(i32::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(i32::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(i32::from(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Double(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<JsonMap> for Value {
    fn from(value: JsonMap) -> Self {
        Value::Object(value)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i32(*i),
            Value::Double(d) => serializer.serialize_f64(*d),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                use serde::ser::SerializeMap;
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                match i32::try_from(value) {
                    Ok(i) => Ok(Value::Int(i)),
                    Err(_) => Ok(Value::Double(value as f64)),
                }
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                match i32::try_from(value) {
                    Ok(i) => Ok(Value::Int(i)),
                    Err(_) => Ok(Value::Double(value as f64)),
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Double(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::Array(items))
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut map = JsonMap::new();
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(Value::Object(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_match_tags() {
        assert!(Value::Null.is_null());
        assert!(Value::Bool(true).is_bool());
        assert!(Value::Int(1).is_int());
        assert!(Value::Double(1.5).is_pure_double());
        assert!(Value::String("x".to_string()).is_string());
        assert!(Value::Array(vec![]).is_array());
        assert!(Value::Object(JsonMap::new()).is_map());
    }

    #[test]
    fn null_string_alias() {
        let aliased = Value::String("null".to_string());
        assert!(aliased.is_null());
        // The alias does not change the tag
        assert!(aliased.is_string());
        assert_eq!(aliased.as_str().unwrap(), "null");

        assert!(!Value::String("NULL".to_string()).is_null());
        assert!(!Value::String(String::new()).is_null());
    }

    #[test]
    fn int_is_double_but_not_pure() {
        let value = Value::Int(7);
        assert!(value.is_double());
        assert!(!value.is_pure_double());

        let value = Value::Double(7.0);
        assert!(value.is_double());
        assert!(value.is_pure_double());
        assert!(!value.is_int());
    }

    #[test]
    fn as_double_promotes_int() {
        assert_eq!(Value::Int(-5).as_double().unwrap(), -5.0);
        assert_eq!(Value::Double(2.5).as_double().unwrap(), 2.5);
        assert!(Value::Bool(false).as_double().is_err());
    }

    #[test]
    fn accessors_report_mismatch() {
        let err = Value::Array(vec![]).as_map().unwrap_err();
        assert_eq!(err.expected, "object");
        assert_eq!(err.found, "array");

        let err = Value::Null.as_bool().unwrap_err();
        assert_eq!(err.found, "null");
    }

    #[test]
    fn from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from(7u16), Value::Int(7));
        assert_eq!(Value::from(3.5f64), Value::Double(3.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from("test".to_string()), Value::String("test".to_string()));
    }

    #[test]
    fn from_collections() {
        let items = vec![Value::from(1), Value::from(2)];
        assert_eq!(Value::from(items.clone()), Value::Array(items));

        let mut map = JsonMap::new();
        map.insert("key".to_string(), Value::from(42));
        assert_eq!(Value::from(map.clone()), Value::Object(map));
    }

    #[test]
    fn default_is_null() {
        assert_eq!(Value::default(), Value::Null);
    }
}
