//! JSON interop for generation-service replies.
//!
//! The generation service answers with a JSON object of candidate fields,
//! sometimes wrapped in a markdown code fence. [`fields_from_json_str`]
//! flattens that reply into a [`FieldMap`]:
//!
//! - strings become scalars and arrays of strings become lists
//! - numbers, booleans and mixed arrays are kept as [`FieldValue::Json`]
//! - `null` values and `null` array items are skipped
//! - nested objects or arrays are rejected

use crate::{Error, FieldMap, FieldValue, Result};
use serde_json::Value;
use tracing::debug;

/// Parses a generation-service reply into a [`FieldMap`].
///
/// # Errors
///
/// Returns [`Error::Json`] if the reply is not a JSON object and
/// [`Error::InvalidField`] if a field has no flat representation.
///
/// # Examples
///
/// ```rust
/// use zero_gravity::fields_from_json_str;
///
/// let reply = "```json\n{\"id\": \"notes-1\", \"claims\": [\"a\", \"b\", \"c\"], \"novelty\": 0.4}\n```";
/// let fields = fields_from_json_str(reply).unwrap();
/// assert_eq!(fields.get_str("id"), Some("notes-1"));
/// assert_eq!(fields.get("novelty").and_then(|v| v.as_json()), Some(&serde_json::json!(0.4)));
/// assert_eq!(fields.get_list("claims").map(|c| c.len()), Some(3));
/// ```
pub fn fields_from_json_str(reply: &str) -> Result<FieldMap> {
    let value: Value = serde_json::from_str(strip_code_fence(reply))?;
    fields_from_json(&value)
}

/// Flattens a JSON object into a [`FieldMap`], preserving key order.
///
/// # Errors
///
/// Returns [`Error::Json`] if `value` is not an object and
/// [`Error::InvalidField`] if a field has no flat representation.
pub fn fields_from_json(value: &Value) -> Result<FieldMap> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::json("expected a JSON object"))?;

    let mut fields = FieldMap::new();
    for (key, value) in object {
        let field = match value {
            Value::Null => {
                debug!(key = %key, "skipping null field");
                continue;
            }
            Value::String(s) => FieldValue::Scalar(s.clone()),
            Value::Number(_) | Value::Bool(_) => FieldValue::Json(value.clone()),
            Value::Array(items) => {
                if items.iter().any(|item| item.is_array() || item.is_object()) {
                    return Err(Error::invalid_field(
                        key,
                        "list items must be strings, numbers or booleans",
                    ));
                }
                FieldValue::from_json_items(items.clone())
            }
            Value::Object(_) => {
                return Err(Error::invalid_field(key, "nested objects are not supported"));
            }
        };
        fields.insert(key.clone(), field);
    }
    Ok(fields)
}

/// Converts a [`FieldMap`] into a JSON object.
#[must_use]
pub fn fields_to_json(fields: &FieldMap) -> Value {
    let object = fields
        .iter()
        .map(|(key, value)| {
            let json = match value {
                FieldValue::Scalar(s) => Value::String(s.clone()),
                FieldValue::List(items) => {
                    Value::Array(items.iter().cloned().map(Value::String).collect())
                }
                FieldValue::Json(value) => value.clone(),
            };
            (key.clone(), json)
        })
        .collect();
    Value::Object(object)
}

/// Strips a surrounding markdown code fence, if any.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening fence line.
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_object_keeps_order() {
        let fields = fields_from_json_str(r#"{"z": "1", "a": "2", "m": "3"}"#).unwrap();
        let keys: Vec<_> = fields.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_fence_without_language() {
        let fields = fields_from_json_str("```\n{\"title\": \"T\"}\n```").unwrap();
        assert_eq!(fields.get_str("title"), Some("T"));
    }

    #[test]
    fn test_nulls_are_skipped() {
        let fields = fields_from_json(&json!({"stance": null, "tags": ["a", null, "b"]})).unwrap();
        assert!(!fields.contains_key("stance"));
        assert_eq!(fields.get("tags"), Some(&FieldValue::from(vec!["a", "b"])));
    }

    #[test]
    fn test_nested_object_rejected() {
        let err = fields_from_json(&json!({"meta": {"a": 1}})).unwrap_err();
        assert!(matches!(err, Error::InvalidField { ref key, .. } if key == "meta"));
    }

    #[test]
    fn test_nested_array_rejected() {
        assert!(fields_from_json(&json!({"claims": [["a"]]})).is_err());
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(matches!(
            fields_from_json_str("[1, 2]"),
            Err(Error::Json(_))
        ));
        assert!(fields_from_json_str("not json").is_err());
    }

    #[test]
    fn test_numbers_and_booleans_keep_type() {
        let reply = json!({"novelty": 0.6, "draft": false, "scores": [1, "two"]});
        let fields = fields_from_json(&reply).unwrap();
        assert_eq!(fields.get("novelty"), Some(&FieldValue::Json(json!(0.6))));
        assert_eq!(fields.get("draft"), Some(&FieldValue::Json(json!(false))));
        assert_eq!(fields.get("scores"), Some(&FieldValue::Json(json!([1, "two"]))));
        assert_eq!(fields_to_json(&fields), reply);
    }

    #[test]
    fn test_to_json_and_back() {
        let mut fields = FieldMap::new();
        fields.insert("id", "x");
        fields.insert("tags", vec!["a"]);
        let value = fields_to_json(&fields);
        assert_eq!(value, json!({"id": "x", "tags": ["a"]}));
        assert_eq!(fields_from_json(&value).unwrap(), fields);
    }
}
