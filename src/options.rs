//! Configuration options for stamp rendering.
//!
//! ## Examples
//!
//! ```rust
//! use zero_gravity::{format_stamp_with_options, FieldMap, StampOptions};
//!
//! let mut fields = FieldMap::new();
//! fields.insert("title", "Notes");
//!
//! let options = StampOptions::new()
//!     .with_version("0.2")
//!     .with_info_url("https://example.com/zero-gravity");
//! let text = format_stamp_with_options(&fields, &options);
//! assert!(text.starts_with("## Zero Gravity Stamp (v0.2)"));
//! assert!(text.contains("https://example.com/zero-gravity"));
//! ```

/// Current stamp format version: the record envelope default and the header label.
pub const DEFAULT_VERSION: &str = "0.1";

/// Configuration options for [`format_stamp_with_options`](crate::format_stamp_with_options).
#[derive(Clone, Debug, PartialEq)]
pub struct StampOptions {
    /// Version shown in the header title. Never written into the block.
    pub version: String,
    /// Link carried by the header tagline. Setting it also enables the header.
    pub info_url: Option<String>,
    /// Leading spaces before each `- item` line.
    pub indent: usize,
    /// Whether to prepend the two-line human header.
    pub header: bool,
}

impl Default for StampOptions {
    fn default() -> Self {
        StampOptions {
            version: DEFAULT_VERSION.to_string(),
            info_url: None,
            indent: 2,
            header: false,
        }
    }
}

impl StampOptions {
    /// Creates default options (version `0.1`, 2-space items, no header).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zero_gravity::StampOptions;
    ///
    /// let options = StampOptions::new();
    /// assert_eq!(options.version, "0.1");
    /// assert_eq!(options.indent, 2);
    /// assert!(!options.header);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the header link and turns the header on.
    #[must_use]
    pub fn with_info_url(mut self, url: impl Into<String>) -> Self {
        self.info_url = Some(url.into());
        self.header = true;
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}
