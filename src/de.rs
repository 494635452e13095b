//! Stamp body parsing.
//!
//! The body grammar is flat and line-oriented:
//!
//! ```text
//! encoding: "zero-gravity"
//! title: Unquoted values are fine too
//! indexes:
//!   - "alpha"
//!   - beta
//! ```
//!
//! The parser is a single forward pass with two states: reading `key: value`
//! lines, and collecting `- item` lines after a bare `key:` header. It never
//! fails; lines it does not understand are skipped.
//!
//! Two behaviours are kept exactly as observed in stamps in the wild:
//!
//! - a repeated key overwrites the earlier value and keeps the earlier position;
//! - a bare `key:` header with no item lines under it is dropped entirely.

use crate::{extract, FieldMap, FieldValue};
use tracing::trace;

/// Parser state for the line scanner.
enum State {
    Fields,
    List { key: String, items: Vec<String> },
}

/// Parses a block body into a [`FieldMap`].
///
/// # Examples
///
/// ```rust
/// use zero_gravity::{parse, FieldValue};
///
/// let fields = parse("title: \"Test\"\nindexes:\n  - \"alpha\"\n  - \"beta\"");
/// assert_eq!(fields.get_str("title"), Some("Test"));
/// assert_eq!(
///     fields.get("indexes"),
///     Some(&FieldValue::from(vec!["alpha", "beta"]))
/// );
/// ```
#[must_use]
pub fn parse(body: &str) -> FieldMap {
    let mut fields = FieldMap::new();
    let mut state = State::Fields;

    for (line_no, line) in body.lines().enumerate() {
        if let State::List { items, .. } = &mut state {
            if let Some(item) = list_item(line) {
                items.push(unquote(item).to_string());
                continue;
            }
            finish_list(&mut fields, std::mem::replace(&mut state, State::Fields));
        }

        let Some((key, rest)) = line.split_once(':') else {
            trace!(line = line_no + 1, "skipping line without a colon");
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            trace!(line = line_no + 1, "skipping line with an empty key");
            continue;
        }

        let rest = rest.trim();
        if rest.is_empty() {
            state = State::List {
                key: key.to_string(),
                items: Vec::new(),
            };
        } else {
            store(&mut fields, key.to_string(), FieldValue::from(unquote(rest)));
        }
    }

    finish_list(&mut fields, state);
    fields
}

/// Extracts the first stamp block from `document` and parses its body.
///
/// Returns `None` when the document carries no complete block.
///
/// # Examples
///
/// ```rust
/// use zero_gravity::parse_stamp;
///
/// let doc = "Prose.\n---BEGIN ZERO GRAVITY---\nintent: \"report\"\n---END ZERO GRAVITY---\n";
/// let fields = parse_stamp(doc).unwrap();
/// assert_eq!(fields.get_str("intent"), Some("report"));
///
/// assert!(parse_stamp("Prose without a stamp.").is_none());
/// ```
#[must_use]
pub fn parse_stamp(document: &str) -> Option<FieldMap> {
    extract(document).map(|block| parse(block.body))
}

fn finish_list(fields: &mut FieldMap, state: State) {
    if let State::List { key, items } = state {
        if items.is_empty() {
            trace!(key = %key, "dropping list header without items");
        } else {
            store(fields, key, FieldValue::List(items));
        }
    }
}

fn store(fields: &mut FieldMap, key: String, value: FieldValue) {
    if let Some(previous) = fields.insert(key, value) {
        trace!(?previous, "duplicate key overwritten");
    }
}

/// Returns the item text of a `- item` line, with any indentation allowed.
fn list_item(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix("- ").map(str::trim)
}

/// Strips one matching pair of surrounding single or double quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
