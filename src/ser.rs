//! Stamp rendering.
//!
//! [`format_stamp`] is the inverse of [`parse_stamp`](crate::parse_stamp) for
//! the stamp fields. Output is fixed-order regardless of the map's own order:
//!
//! ```text
//! ---BEGIN ZERO GRAVITY---
//! encoding: "zero-gravity"
//! version: "0.1"
//! title: "Test"
//! intent: "proposal"
//! indexes:
//!   - "alpha"
//!   - "beta"
//! ---END ZERO GRAVITY---
//! ```
//!
//! Every value is wrapped in double quotes. The parser strips exactly one
//! pair, so values containing quotes survive the round trip unchanged.
//! Each field keeps its shape: a list is written as a `key:` header with
//! item lines and a scalar as a single line, whichever key it sits under.

use crate::{FieldMap, FieldValue, StampOptions, BEGIN_MARKER, END_MARKER};
use std::fmt::Write;

/// Stamp fields, in output order.
const STAMP_KEYS: [&str; 5] = ["encoding", "version", "title", "intent", "indexes"];

pub const HEADER_TITLE: &str = "## Zero Gravity Stamp";
pub const HEADER_TAGLINE: &str = "This document carries a zero-gravity stamp for semantic indexing.";

/// Renders the stamp fields of `fields` as a delimited block.
///
/// Only the stamp fields the map holds are written; nothing is defaulted.
///
/// # Examples
///
/// ```rust
/// use zero_gravity::{format_stamp, parse_stamp, FieldMap};
///
/// let mut fields = FieldMap::new();
/// fields.insert("encoding", "zero-gravity");
/// fields.insert("version", "0.1");
/// fields.insert("title", "Test");
/// fields.insert("indexes", vec!["alpha", "beta"]);
///
/// let text = format_stamp(&fields);
/// assert_eq!(parse_stamp(&text), Some(fields));
/// ```
#[must_use]
pub fn format_stamp(fields: &FieldMap) -> String {
    format_stamp_with_options(fields, &StampOptions::default())
}

/// Renders the stamp with the two-line human header above it.
///
/// `version` labels the header title; the block itself is written exactly as
/// [`format_stamp`] writes it.
///
/// # Examples
///
/// ```rust
/// use zero_gravity::{format_stamp_with_header, FieldMap};
///
/// let mut fields = FieldMap::new();
/// fields.insert("title", "Test");
///
/// let text = format_stamp_with_header(&fields, Some("https://example.com"), "0.1");
/// let mut lines = text.lines();
/// assert_eq!(lines.next(), Some("## Zero Gravity Stamp (v0.1)"));
/// assert!(lines.next().unwrap().ends_with("Learn more: https://example.com"));
/// ```
#[must_use]
pub fn format_stamp_with_header(fields: &FieldMap, info_url: Option<&str>, version: &str) -> String {
    let mut options = StampOptions::new().with_version(version).with_header(true);
    options.info_url = info_url.map(str::to_string);
    format_stamp_with_options(fields, &options)
}

/// Renders the stamp according to `options`.
#[must_use]
pub fn format_stamp_with_options(fields: &FieldMap, options: &StampOptions) -> String {
    let mut out = String::new();

    if options.header {
        let _ = writeln!(out, "{HEADER_TITLE} (v{})", options.version);
        out.push_str(HEADER_TAGLINE);
        if let Some(url) = &options.info_url {
            let _ = write!(out, " Learn more: {url}");
        }
        out.push_str("\n\n");
    }

    out.push_str(BEGIN_MARKER);
    out.push('\n');

    for key in STAMP_KEYS {
        match fields.get(key) {
            Some(FieldValue::Scalar(value)) => {
                let _ = writeln!(out, "{key}: \"{value}\"");
            }
            Some(FieldValue::List(items)) if !items.is_empty() => {
                let _ = writeln!(out, "{key}:");
                for item in items {
                    let _ = writeln!(out, "{:indent$}- \"{item}\"", "", indent = options.indent);
                }
            }
            Some(value @ FieldValue::Json(_)) if !value.is_empty() => {
                if value.array_len().is_some() {
                    let _ = writeln!(out, "{key}:");
                    for item in value.items() {
                        let _ = writeln!(out, "{:indent$}- \"{item}\"", "", indent = options.indent);
                    }
                } else {
                    let _ = writeln!(out, "{key}: \"{value}\"");
                }
            }
            Some(FieldValue::List(_) | FieldValue::Json(_)) | None => {}
        }
    }

    out.push_str(END_MARKER);
    out
}
