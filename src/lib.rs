//! # zero_gravity
//!
//! Parsing, validation and canonicalization for the zero-gravity stamp, a
//! small line-oriented block embedded in prose documents, and for its JSON
//! superset, the full record.
//!
//! ## What is a stamp?
//!
//! ```text
//! ---BEGIN ZERO GRAVITY---
//! encoding: "zero-gravity"
//! version: "0.1"
//! title: "Storage layout"
//! intent: "design"
//! indexes:
//!   - "pages"
//!   - "extents"
//! ---END ZERO GRAVITY---
//! ```
//!
//! The block carries flat fields only: quoted or bare scalars, and lists of
//! `- item` lines under a bare `key:` header.
//!
//! ## Quick Start
//!
//! ```rust
//! use zero_gravity::{format_stamp, parse_stamp, validate_stamp};
//!
//! let doc = "Some prose.\n\
//!            ---BEGIN ZERO GRAVITY---\n\
//!            encoding: \"zero-gravity\"\n\
//!            version: \"0.1\"\n\
//!            title: \"Test\"\n\
//!            intent: \"proposal\"\n\
//!            indexes:\n  - \"alpha\"\n  - \"beta\"\n\
//!            ---END ZERO GRAVITY---\n";
//!
//! let fields = parse_stamp(doc).unwrap();
//! assert!(validate_stamp(&fields).valid);
//!
//! // Rendering and reparsing yields the same fields
//! let text = format_stamp(&fields);
//! assert_eq!(parse_stamp(&text), Some(fields));
//! ```
//!
//! ### Full records and embeddings
//!
//! ```rust
//! use zero_gravity::{build_full_json, content_hash, fields_to_embedding_text, FieldMap};
//!
//! let mut fields = FieldMap::new();
//! fields.insert("id", "storage-layout");
//! fields.insert("intent", "design");
//! fields.insert("relevance", "For storage engineers");
//! fields.insert("claims", vec!["Pages are 8 KiB", "Extents group pages", "Free space is per extent"]);
//!
//! let text = fields_to_embedding_text(&fields);
//! let hash = content_hash(&text);
//! assert_eq!(hash.len(), 64);
//!
//! let record = build_full_json(&fields, None);
//! assert!(record.validate().valid);
//! ```
//!
//! ## Errors
//!
//! Content problems are never errors: a document without a block yields
//! `None`, and field problems come back in a [`ValidationResult`]. [`Error`]
//! is reserved for JSON decoding and the embedding provider seam.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`trace` for parser decisions, `debug`
//! for outcomes) and never installs a subscriber.

pub mod block;
pub mod canonical;
pub mod de;
pub mod embed;
pub mod error;
pub mod grammar;
pub mod json;
pub mod macros;
pub mod map;
pub mod options;
pub mod record;
pub mod ser;
pub mod validate;
pub mod value;

pub use block::{extract, Block, BEGIN_MARKER, END_MARKER};
pub use canonical::{content_hash, fields_hash, fields_to_embedding_text};
pub use de::{parse, parse_stamp};
pub use embed::{embed_fields, EmbeddingProvider};
pub use error::{Error, Result};
pub use json::{fields_from_json, fields_from_json_str, fields_to_json};
pub use map::FieldMap;
pub use options::{StampOptions, DEFAULT_VERSION};
pub use record::{
    build_full_json, build_full_json_at, EmbeddingDescriptor, EmbeddingVector, FullRecord,
};
pub use ser::{format_stamp, format_stamp_with_header, format_stamp_with_options};
pub use validate::{validate_full_json, validate_stamp, ValidationResult};
pub use value::FieldValue;

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "encoding: \"zero-gravity\"\n\
                        version: \"0.1\"\n\
                        title: \"Test\"\n\
                        intent: \"proposal\"\n\
                        indexes:\n  \
                        - \"alpha\"\n  \
                        - \"beta\"";

    #[test]
    fn test_end_to_end_example() {
        let fields = parse(BODY);

        let mut expected = FieldMap::new();
        expected.insert("encoding", "zero-gravity");
        expected.insert("version", "0.1");
        expected.insert("title", "Test");
        expected.insert("intent", "proposal");
        expected.insert("indexes", vec!["alpha", "beta"]);
        assert_eq!(fields, expected);

        let result = validate_stamp(&fields);
        assert!(result.valid);
        assert!(result.errors.is_empty());

        assert_eq!(parse_stamp(&format_stamp(&fields)), Some(fields));
    }

    #[test]
    fn test_stamp_then_record() {
        let mut fields = parse(BODY);
        fields.insert("id", "test");
        fields.insert("relevance", "Demonstrates the pipeline");
        fields.insert("claims", vec!["one", "two", "three"]);

        let record = build_full_json(&fields, None);
        assert!(record.validate().valid);
        assert_eq!(record.fields.get_str("title"), Some("Test"));
    }
}
