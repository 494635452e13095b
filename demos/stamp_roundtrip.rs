//! Read a stamp out of a document, check it, and render it again.
//!
//! Run with: cargo run --example stamp_roundtrip

use std::error::Error;
use zero_gravity::{format_stamp_with_header, parse_stamp, validate_stamp};

const DOCUMENT: &str = r#"# Extents

Grouping pages into extents keeps free-space bookkeeping small.

---BEGIN ZERO GRAVITY---
encoding: "zero-gravity"
version: "0.1"
title: "Extents"
intent: "proposal"
indexes:
  - "pages"
  - "extents"
---END ZERO GRAVITY---
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let fields = parse_stamp(DOCUMENT).ok_or("document carries no stamp")?;
    println!("Parsed fields: {:?}\n", fields);

    let result = validate_stamp(&fields);
    if result.valid {
        println!("✓ Stamp is valid");
    } else {
        for error in &result.errors {
            println!("✗ {}", error);
        }
    }

    // Render with the human header and confirm it reads back the same
    let rendered = format_stamp_with_header(&fields, Some("https://example.com/zero-gravity"), "0.1");
    println!("\n{}\n", rendered);
    assert_eq!(parse_stamp(&rendered), Some(fields));
    println!("✓ Round-trip successful");

    Ok(())
}
