//! The canonical JSON record.
//!
//! A [`FullRecord`] is the JSON superset of a stamp: the fixed envelope
//! (`encoding`, `version`), the caller's fields, an optional embedding and the
//! creation time. It serializes as one flat JSON object:
//!
//! ```json
//! {
//!   "encoding": "zero-gravity",
//!   "version": "0.1",
//!   "id": "storage-layout",
//!   "intent": "design",
//!   "claims": ["...", "...", "..."],
//!   "embedding": {
//!     "model": "text-embed-small",
//!     "dimensions": 3,
//!     "input_hash": "9f86d0...",
//!     "vector": [0.1, 0.2, 0.3]
//!   },
//!   "created_at": "2026-10-19T12:00:00.000Z"
//! }
//! ```

use crate::validate::{validate_full_json, ENCODING};
use crate::{content_hash, fields_hash, Error, FieldMap, Result, ValidationResult, DEFAULT_VERSION};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// Length of a hex-encoded SHA-256 digest.
pub const INPUT_HASH_LEN: usize = 64;

/// The vector carried by an embedding.
///
/// Some providers return an opaque placeholder instead of the floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingVector {
    Values(Vec<f32>),
    Placeholder(String),
}

/// Embedding attached to a [`FullRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingDescriptor {
    pub model: String,
    pub dimensions: usize,
    /// Content hash of the canonical text the vector was computed from.
    pub input_hash: String,
    pub vector: EmbeddingVector,
}

impl EmbeddingDescriptor {
    /// Builds a descriptor for `vector`, hashing `canonical_text` into `input_hash`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zero_gravity::EmbeddingDescriptor;
    ///
    /// let embedding = EmbeddingDescriptor::new("text-embed-small", "Title: T", vec![0.5, 0.25]);
    /// assert_eq!(embedding.dimensions, 2);
    /// assert_eq!(embedding.input_hash.len(), 64);
    /// assert!(embedding.check_shape().is_ok());
    /// ```
    #[must_use]
    pub fn new(model: impl Into<String>, canonical_text: &str, vector: Vec<f32>) -> Self {
        EmbeddingDescriptor {
            model: model.into(),
            dimensions: vector.len(),
            input_hash: content_hash(canonical_text),
            vector: EmbeddingVector::Values(vector),
        }
    }

    /// Verifies the descriptor shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEmbedding`] if `input_hash` is not 64 lowercase
    /// hex characters, or if a float vector's length differs from `dimensions`.
    pub fn check_shape(&self) -> Result<()> {
        let hash_ok = self.input_hash.len() == INPUT_HASH_LEN
            && self
                .input_hash
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !hash_ok {
            return Err(Error::invalid_embedding(
                "input_hash must be 64 lowercase hex characters",
            ));
        }
        if let EmbeddingVector::Values(values) = &self.vector {
            if values.len() != self.dimensions {
                return Err(Error::invalid_embedding(&format!(
                    "vector has {} values, expected {}",
                    values.len(),
                    self.dimensions
                )));
            }
        }
        Ok(())
    }

    /// Returns `true` if this embedding was computed from the current
    /// canonical text of `fields`.
    #[must_use]
    pub fn matches_fields(&self, fields: &FieldMap) -> bool {
        self.input_hash == fields_hash(fields)
    }
}

/// The canonical JSON record.
#[derive(Debug, Clone, PartialEq)]
pub struct FullRecord {
    /// Envelope and caller fields, envelope keys first.
    pub fields: FieldMap,
    pub embedding: Option<EmbeddingDescriptor>,
    pub created_at: DateTime<Utc>,
}

impl FullRecord {
    /// Runs [`validate_full_json`] over the record's fields.
    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        validate_full_json(&self.fields)
    }

    /// Serializes the record as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the record as an indented JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a stored record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if `json` is not a record object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Assembles a [`FullRecord`] stamped with the current time.
///
/// Caller fields override the envelope, including `encoding` and `version`.
///
/// # Examples
///
/// ```rust
/// use zero_gravity::{build_full_json, FieldMap};
///
/// let mut fields = FieldMap::new();
/// fields.insert("id", "notes-1");
/// fields.insert("version", "0.2");
///
/// let record = build_full_json(&fields, None);
/// assert_eq!(record.fields.get_str("encoding"), Some("zero-gravity"));
/// assert_eq!(record.fields.get_str("version"), Some("0.2"));
/// assert_eq!(record.fields.get_str("id"), Some("notes-1"));
/// ```
#[must_use]
pub fn build_full_json(fields: &FieldMap, embedding: Option<EmbeddingDescriptor>) -> FullRecord {
    build_full_json_at(fields, embedding, Utc::now())
}

/// Assembles a [`FullRecord`] with an explicit creation time.
#[must_use]
pub fn build_full_json_at(
    fields: &FieldMap,
    embedding: Option<EmbeddingDescriptor>,
    created_at: DateTime<Utc>,
) -> FullRecord {
    let mut merged = FieldMap::new();
    merged.insert("encoding", ENCODING);
    merged.insert("version", DEFAULT_VERSION);
    merged.extend(
        fields
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone())),
    );

    debug!(
        fields = merged.len(),
        embedded = embedding.is_some(),
        "assembled full record"
    );
    FullRecord {
        fields: merged,
        embedding,
        created_at,
    }
}

/// Keys owned by the record itself rather than the field map.
const RESERVED_KEYS: [&str; 2] = ["embedding", "created_at"];

impl Serialize for FullRecord {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let extra = 1 + usize::from(self.embedding.is_some());
        let mut map = serializer.serialize_map(Some(self.fields.len() + extra))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        if let Some(embedding) = &self.embedding {
            map.serialize_entry("embedding", embedding)?;
        }
        map.serialize_entry(
            "created_at",
            &self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for FullRecord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            embedding: Option<EmbeddingDescriptor>,
            created_at: DateTime<Utc>,
            #[serde(flatten)]
            fields: FieldMap,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(FullRecord {
            fields: raw.fields,
            embedding: raw.embedding,
            created_at: raw.created_at,
        })
    }
}
