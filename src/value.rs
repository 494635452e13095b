//! Flat field values.
//!
//! A stamp field is either a single string or an ordered list of strings.
//! [`FieldValue`] makes that explicit; there are no numbers, booleans or nested
//! maps in the stamp grammar.
//!
//! JSON records are looser: a generation service may answer `"novelty": 0.4`.
//! Such values are kept as [`FieldValue::Json`] so they survive a trip through
//! a [`FullRecord`](crate::FullRecord). The stamp parser never produces them;
//! stamp rendering and canonical text use their textual form.
//!
//! ## Examples
//!
//! ```rust
//! use zero_gravity::FieldValue;
//!
//! let title = FieldValue::from("Test");
//! assert_eq!(title.as_str(), Some("Test"));
//!
//! let indexes = FieldValue::from(vec!["alpha", "beta"]);
//! assert_eq!(indexes.len(), 2);
//! assert!(indexes.is_list());
//!
//! let novelty = FieldValue::Json(serde_json::json!(0.4));
//! assert_eq!(novelty.to_string(), "0.4");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A single field in a [`FieldMap`](crate::FieldMap).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
    /// A JSON number, boolean, or array that is not all strings.
    Json(Value),
}

impl FieldValue {
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, FieldValue::Scalar(_))
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, FieldValue::List(_))
    }

    /// Returns `true` for an empty string or an empty list.
    ///
    /// Required-field checks treat an empty value the same as a missing one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zero_gravity::FieldValue;
    ///
    /// assert!(FieldValue::from("").is_empty());
    /// assert!(FieldValue::List(vec![]).is_empty());
    /// assert!(!FieldValue::from(vec![""]).is_empty());
    /// assert!(!FieldValue::Json(serde_json::json!(0)).is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Scalar(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Json(Value::Array(items)) => items.is_empty(),
            FieldValue::Json(_) => false,
        }
    }

    /// Number of list items, or 1 for a scalar.
    #[must_use]
    pub fn len(&self) -> usize {
        self.array_len().unwrap_or(1)
    }

    /// Number of items if the value is a list or a JSON array.
    #[must_use]
    pub fn array_len(&self) -> Option<usize> {
        match self {
            FieldValue::List(items) => Some(items.len()),
            FieldValue::Json(Value::Array(items)) => Some(items.len()),
            _ => None,
        }
    }

    /// If the value is a scalar, returns it.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a list, returns its items.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// If the value came from a non-string JSON value, returns it.
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            FieldValue::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Text of each item: one for a scalar, one per element for lists and arrays.
    #[must_use]
    pub fn items(&self) -> Vec<String> {
        match self {
            FieldValue::Scalar(s) => vec![s.clone()],
            FieldValue::List(items) => items.clone(),
            FieldValue::Json(Value::Array(items)) => items.iter().map(json_text).collect(),
            FieldValue::Json(other) => vec![json_text(other)],
        }
    }

    /// Renders the value as one string, joining list items with `sep`.
    #[must_use]
    pub fn join(&self, sep: &str) -> String {
        match self {
            FieldValue::Scalar(s) => s.clone(),
            FieldValue::List(items) => items.join(sep),
            FieldValue::Json(_) => self.items().join(sep),
        }
    }
}

/// Text form of a JSON value: strings unquoted, everything else as JSON.
fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(", "))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Scalar(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Scalar(s) => serializer.serialize_str(s),
            FieldValue::List(items) => items.serialize(serializer),
            FieldValue::Json(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, SeqAccess, Visitor};

        struct FieldValueVisitor;

        impl<'de> Visitor<'de> for FieldValueVisitor {
            type Value = FieldValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, number, boolean or flat list")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(FieldValue::Json(Value::Bool(value)))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(FieldValue::Json(Value::from(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(FieldValue::Json(Value::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(FieldValue::Json(Value::from(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(FieldValue::Scalar(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(FieldValue::Scalar(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items: Vec<Value> = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element::<Value>()? {
                    if item.is_array() || item.is_object() {
                        return Err(de::Error::custom("list items must not be nested"));
                    }
                    items.push(item);
                }
                Ok(FieldValue::from_json_items(items))
            }
        }

        deserializer.deserialize_any(FieldValueVisitor)
    }
}

impl FieldValue {
    /// Builds a list from flat JSON items, dropping `null`s.
    ///
    /// All-string items become a [`FieldValue::List`]; anything else keeps
    /// the JSON array.
    pub(crate) fn from_json_items(items: Vec<Value>) -> FieldValue {
        let items: Vec<Value> = items.into_iter().filter(|item| !item.is_null()).collect();
        if items.iter().all(Value::is_string) {
            FieldValue::List(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            )
        } else {
            FieldValue::Json(Value::Array(items))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_scalar_and_list() {
        assert_eq!(FieldValue::from("solo").join("; "), "solo");
        assert_eq!(FieldValue::from(vec!["a", "b"]).join("; "), "a; b");
    }

    #[test]
    fn test_deserialize_mixed_list_keeps_json() {
        let value: FieldValue = serde_json::from_str(r#"["a", 2, true]"#).unwrap();
        assert_eq!(value, FieldValue::Json(json!(["a", 2, true])));
        assert_eq!(value.join("; "), "a; 2; true");
        assert_eq!(value.len(), 3);
    }

    #[test]
    fn test_deserialize_string_list() {
        let value: FieldValue = serde_json::from_str(r#"["a", null, "b"]"#).unwrap();
        assert_eq!(value, FieldValue::from(vec!["a", "b"]));
    }

    #[test]
    fn test_deserialize_number_scalar() {
        let value: FieldValue = serde_json::from_str("0.5").unwrap();
        assert_eq!(value.as_json(), Some(&json!(0.5)));
        assert_eq!(value.as_str(), None);
        assert_eq!(value.to_string(), "0.5");
    }

    #[test]
    fn test_deserialize_rejects_object() {
        let result: Result<FieldValue, _> = serde_json::from_str(r#"{"a": "b"}"#);
        assert!(result.is_err());
        let nested: Result<FieldValue, _> = serde_json::from_str(r#"[["a"]]"#);
        assert!(nested.is_err());
    }

    #[test]
    fn test_serialize_shapes() {
        assert_eq!(
            serde_json::to_string(&FieldValue::from("x")).unwrap(),
            "\"x\""
        );
        assert_eq!(
            serde_json::to_string(&FieldValue::from(vec!["x", "y"])).unwrap(),
            r#"["x","y"]"#
        );
        assert_eq!(
            serde_json::to_string(&FieldValue::Json(json!(true))).unwrap(),
            "true"
        );
    }

    #[test]
    fn test_json_items() {
        assert_eq!(FieldValue::Json(json!(7)).items(), vec!["7"]);
        assert_eq!(FieldValue::Json(json!(["x", 1.5])).items(), vec!["x", "1.5"]);
        assert!(FieldValue::Json(json!([])).is_empty());
    }
}
