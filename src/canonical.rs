//! Canonical text and content hashing.
//!
//! The canonical text of a field map is the input to the embedding
//! collaborator, and its SHA-256 digest is the cache key for the resulting
//! embedding. The text depends only on field contents, never on the map's
//! key order:
//!
//! ```text
//! Title: Storage layout
//! Intent: design
//! Relevance: For storage engineers
//! Indexes: pages; extents
//! Claims: Pages are 8 KiB; Extents group 8 pages; Free space is tracked per extent
//! Tags: storage, layout
//! Relations: wal-design
//! ```
//!
//! Only lines whose field is present and non-empty are emitted.

use crate::FieldMap;
use sha2::{Digest, Sha256};

/// Output label, source key and list separator for each canonical line, in order.
const CANONICAL_FIELDS: [(&str, &str, &str); 7] = [
    ("Title", "title", "; "),
    ("Intent", "intent", "; "),
    ("Relevance", "relevance", "; "),
    ("Indexes", "indexes", "; "),
    ("Claims", "claims", "; "),
    ("Tags", "tags", ", "),
    ("Relations", "relations", ", "),
];

/// Builds the canonical embedding text for `fields`.
///
/// # Examples
///
/// ```rust
/// use zero_gravity::{fields_to_embedding_text, FieldMap};
///
/// let mut fields = FieldMap::new();
/// fields.insert("tags", vec!["a", "b"]);
/// fields.insert("title", "T");
///
/// assert_eq!(fields_to_embedding_text(&fields), "Title: T\nTags: a, b");
/// ```
#[must_use]
pub fn fields_to_embedding_text(fields: &FieldMap) -> String {
    CANONICAL_FIELDS
        .iter()
        .filter_map(|(label, key, sep)| {
            let value = fields.get(key)?;
            if value.is_empty() {
                return None;
            }
            Some(format!("{label}: {}", value.join(sep)))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lowercase hex SHA-256 digest of `text`.
///
/// # Examples
///
/// ```rust
/// use zero_gravity::content_hash;
///
/// let hash = content_hash("");
/// assert_eq!(hash.len(), 64);
/// assert!(hash.starts_with("e3b0c442"));
/// ```
#[must_use]
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Content hash of the canonical text of `fields`.
#[must_use]
pub fn fields_hash(fields: &FieldMap) -> String {
    content_hash(&fields_to_embedding_text(fields))
}
