//! Stamp block grammar
//!
//! This module documents the stamp format as read by [`parse_stamp`](crate::parse_stamp)
//! and written by [`format_stamp`](crate::format_stamp).
//!
//! # Delimiters
//!
//! A stamp sits between two marker lines. Each marker must be the whole line:
//!
//! ```text
//! ---BEGIN ZERO GRAVITY---
//! ...
//! ---END ZERO GRAVITY---
//! ```
//!
//! **Rules**:
//! - The first `BEGIN` line opens the block; the next `END` line closes it
//! - Later blocks in the same document are ignored
//! - A `BEGIN` line with no `END` after it means the document has no stamp
//! - `\r\n` line endings are accepted
//!
//! # Fields
//!
//! ## Scalars
//!
//! ```text
//! title: "Storage layout"
//! intent: design
//! note: 'single quotes work too'
//! ```
//!
//! - The key is everything before the first `:`, trimmed
//! - The value is everything after it, trimmed, with one matching pair of
//!   surrounding `"` or `'` removed
//! - Values are never typed: `version: 0.1` is the string `"0.1"`
//!
//! ## Lists
//!
//! ```text
//! indexes:
//!   - "pages"
//!   - extents
//! ```
//!
//! - A key with nothing after the colon opens a list
//! - Item lines start with `- ` after any indentation; items are unquoted like scalars
//! - The list ends at the first line that is not an item, blank lines included
//! - A list header with no items is dropped, the key is not stored
//!
//! ## Everything else
//!
//! | Line | Effect |
//! |------|--------|
//! | blank | skipped |
//! | no `:` | skipped |
//! | empty key (`: value`) | skipped |
//! | repeated key | replaces the earlier value, keeps the earlier position |
//!
//! ```rust
//! use zero_gravity::parse;
//!
//! let fields = parse("Prose inside the block.\ntitle: A\n\ntitle: B\nempty:\n");
//! assert_eq!(fields.len(), 1);
//! assert_eq!(fields.get_str("title"), Some("B"));
//! ```
//!
//! # Required fields
//!
//! | Record | Required | Constrained |
//! |--------|----------|-------------|
//! | stamp | `encoding`, `version`, `title`, `intent`, `indexes` | `encoding` must be `zero-gravity` |
//! | full record | `id`, `intent`, `relevance`, `claims` | `intent`, `stance` vocabularies; 3 to 7 `claims`; `id` is `[a-z0-9-]+` |
//!
//! Vocabularies:
//!
//! - `intent`: `proposal`, `critique`, `synthesis`, `report`, `design`
//! - `stance`: `speculative`, `empirical`, `prescriptive`, `exploratory`
//!
//! # Output form
//!
//! [`format_stamp`](crate::format_stamp) writes the stamp fields the map holds in
//! the order `encoding`, `version`, `title`, `intent`, `indexes`, double-quotes
//! every value and indents list items by two spaces. Absent fields stay absent.
//! Other fields are left to the JSON record.
//!
//! ```rust
//! use zero_gravity::{fields, format_stamp};
//!
//! let text = format_stamp(&fields! { "intent": "report", "title": "T" });
//! assert_eq!(
//!     text,
//!     "---BEGIN ZERO GRAVITY---\ntitle: \"T\"\nintent: \"report\"\n---END ZERO GRAVITY---"
//! );
//! ```
