//! Advisory validation for stamps and full records.
//!
//! Validation never fails. Each rule that does not hold adds a message to a
//! [`ValidationResult`]; the caller decides what to do with invalid data.
//!
//! Two rule sets exist:
//!
//! - [`validate_stamp`]: the five-field block embedded in documents
//! - [`validate_full_json`]: the extended JSON record
//!
//! A field counts as missing when it is absent, an empty string, or an
//! empty list.
//!
//! ## Examples
//!
//! ```rust
//! use zero_gravity::{parse, validate_stamp};
//!
//! let fields = parse("encoding: \"zero-gravity\"\nversion: \"0.1\"\ntitle: \"T\"\nintent: \"report\"");
//! let result = validate_stamp(&fields);
//! assert!(!result.valid);
//! assert_eq!(result.errors, vec!["missing required field: indexes"]);
//! ```

use crate::{FieldMap, FieldValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The only accepted value of the `encoding` field.
pub const ENCODING: &str = "zero-gravity";

pub const STAMP_REQUIRED: [&str; 5] = ["encoding", "version", "title", "intent", "indexes"];
pub const FULL_REQUIRED: [&str; 4] = ["id", "intent", "relevance", "claims"];

/// Controlled vocabulary for `intent`.
pub const INTENTS: [&str; 5] = ["proposal", "critique", "synthesis", "report", "design"];
/// Controlled vocabulary for `stance`.
pub const STANCES: [&str; 4] = ["speculative", "empirical", "prescriptive", "exploratory"];

pub const MIN_CLAIMS: usize = 3;
pub const MAX_CLAIMS: usize = 7;

/// Outcome of a validation pass. `valid` is true iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        ValidationResult {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Checks the stamp rule set.
///
/// An `encoding` other than `zero-gravity` is reported separately from the
/// presence check.
#[must_use]
pub fn validate_stamp(fields: &FieldMap) -> ValidationResult {
    let mut errors = Vec::new();
    check_required(fields, &STAMP_REQUIRED, &mut errors);

    if let Some(encoding) = fields.get("encoding") {
        if encoding.as_str() != Some(ENCODING) {
            errors.push(format!("unexpected encoding: {encoding}"));
        }
    }

    debug!(errors = errors.len(), "validated stamp");
    ValidationResult::from_errors(errors)
}

/// Checks the full-record rule set.
///
/// # Examples
///
/// ```rust
/// use zero_gravity::{validate_full_json, FieldMap};
///
/// let mut fields = FieldMap::new();
/// fields.insert("id", "Bad_ID!");
/// fields.insert("intent", "design");
/// fields.insert("relevance", "Explains the storage layout.");
/// fields.insert("claims", vec!["a", "b", "c"]);
///
/// let result = validate_full_json(&fields);
/// assert_eq!(result.errors, vec!["invalid id: Bad_ID!"]);
/// ```
#[must_use]
pub fn validate_full_json(fields: &FieldMap) -> ValidationResult {
    let mut errors = Vec::new();
    check_required(fields, &FULL_REQUIRED, &mut errors);
    check_vocabulary(fields, "intent", &INTENTS, &mut errors);
    check_vocabulary(fields, "stance", &STANCES, &mut errors);

    if let Some(count) = fields.get("claims").and_then(FieldValue::array_len) {
        if count < MIN_CLAIMS {
            errors.push(format!("too few claims: {count} (minimum {MIN_CLAIMS})"));
        } else if count > MAX_CLAIMS {
            errors.push(format!("too many claims: {count} (maximum {MAX_CLAIMS})"));
        }
    }

    if let Some(id) = fields.get("id") {
        let ok = match id {
            FieldValue::Scalar(s) => s.is_empty() || is_valid_id(s),
            FieldValue::List(_) | FieldValue::Json(_) => false,
        };
        if !ok {
            errors.push(format!("invalid id: {id}"));
        }
    }

    debug!(errors = errors.len(), "validated full record");
    ValidationResult::from_errors(errors)
}

/// Returns `true` if `id` is one or more of `a-z`, `0-9` and `-`.
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

fn check_required(fields: &FieldMap, required: &[&str], errors: &mut Vec<String>) {
    for key in required {
        if !fields.is_present(key) {
            errors.push(format!("missing required field: {key}"));
        }
    }
}

fn check_vocabulary(fields: &FieldMap, key: &str, allowed: &[&str], errors: &mut Vec<String>) {
    let Some(value) = fields.get(key) else {
        return;
    };
    if value.is_empty() {
        return;
    }
    let ok = value.as_str().is_some_and(|v| allowed.contains(&v));
    if !ok {
        errors.push(format!("invalid {key}: {value}"));
    }
}
