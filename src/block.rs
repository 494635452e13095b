//! Locating the stamp block inside a document.
//!
//! A block is opened by a line reading exactly [`BEGIN_MARKER`] and closed by
//! the next line reading exactly [`END_MARKER`]. Only the first block in a
//! document is returned. A `BEGIN` with no `END` after it is treated as no
//! block at all.

use tracing::debug;

pub const BEGIN_MARKER: &str = "---BEGIN ZERO GRAVITY---";
pub const END_MARKER: &str = "---END ZERO GRAVITY---";

/// A delimited region found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// The matched text, from the start of the `BEGIN` line to the end of the `END` line.
    pub raw: &'a str,
    /// The text strictly between the marker lines.
    pub body: &'a str,
}

/// Finds the first stamp block in `text`.
///
/// # Examples
///
/// ```rust
/// use zero_gravity::extract;
///
/// let doc = "Intro\n---BEGIN ZERO GRAVITY---\ntitle: \"T\"\n---END ZERO GRAVITY---\nOutro";
/// let block = extract(doc).unwrap();
/// assert_eq!(block.body, "title: \"T\"");
///
/// assert!(extract("---BEGIN ZERO GRAVITY---\ntitle: \"T\"").is_none());
/// ```
#[must_use]
pub fn extract(text: &str) -> Option<Block<'_>> {
    let mut begin: Option<(usize, usize)> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        let content = trim_line_ending(line);

        match begin {
            None if content == BEGIN_MARKER => begin = Some((start, offset)),
            Some((raw_start, body_start)) if content == END_MARKER => {
                // The newline that ends the last body line belongs to the END line.
                let between = &text[body_start..start];
                let body = between
                    .strip_suffix('\n')
                    .map_or(between, |b| b.strip_suffix('\r').unwrap_or(b));
                return Some(Block {
                    raw: &text[raw_start..start + content.len()],
                    body,
                });
            }
            _ => {}
        }
    }

    if begin.is_some() {
        debug!("begin marker found without a matching end marker");
    } else {
        debug!("no stamp block found");
    }
    None
}

fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
