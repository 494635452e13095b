//! Error types for the boundaries around stamp data.
//!
//! Malformed stamp *content* is never an error in this crate: a missing block
//! is `None` and field problems are reported through
//! [`ValidationResult`](crate::ValidationResult). The [`Error`] type covers the
//! places where data crosses a serialization or collaborator boundary:
//!
//! - **JSON**: a generation-service reply or stored record that is not valid JSON
//! - **Invalid fields**: JSON values that cannot be flattened into a [`FieldMap`](crate::FieldMap)
//! - **Invalid embeddings**: an embedding descriptor with the wrong shape
//! - **Provider failures**: errors surfaced by an [`EmbeddingProvider`](crate::EmbeddingProvider)
//!
//! ## Examples
//!
//! ```rust
//! use zero_gravity::{fields_from_json_str, Error};
//!
//! let result = fields_from_json_str("{\"id\": {\"nested\": true}}");
//! assert!(matches!(result, Err(Error::InvalidField { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all errors that can occur at the edges of the stamp core.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// JSON could not be parsed or produced
    #[error("JSON error: {0}")]
    Json(String),

    /// A JSON value that has no flat field representation
    #[error("Invalid field '{key}': {msg}")]
    InvalidField { key: String, msg: String },

    /// An embedding descriptor that does not have the required shape
    #[error("Invalid embedding: {0}")]
    InvalidEmbedding(String),

    /// Failure reported by an embedding provider
    #[error("Embedding provider '{model}' failed: {msg}")]
    Provider { model: String, msg: String },
}

impl Error {
    /// Creates a JSON error from any displayable cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zero_gravity::Error;
    ///
    /// let err = Error::json("expected value at line 1 column 1");
    /// assert!(err.to_string().starts_with("JSON error"));
    /// ```
    pub fn json<T: fmt::Display>(cause: T) -> Self {
        Error::Json(cause.to_string())
    }

    /// Creates an invalid field error for the given key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zero_gravity::Error;
    ///
    /// let err = Error::invalid_field("claims", "nested objects are not supported");
    /// assert!(err.to_string().contains("'claims'"));
    /// ```
    pub fn invalid_field(key: &str, msg: &str) -> Self {
        Error::InvalidField {
            key: key.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an invalid embedding error.
    pub fn invalid_embedding(msg: &str) -> Self {
        Error::InvalidEmbedding(msg.to_string())
    }

    /// Creates a provider error for the named embedding model.
    pub fn provider<T: fmt::Display>(model: &str, msg: T) -> Self {
        Error::Provider {
            model: model.to_string(),
            msg: msg.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::json(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_message_names_model() {
        let err = Error::provider("text-embed-small", "timeout");
        assert_eq!(
            err.to_string(),
            "Embedding provider 'text-embed-small' failed: timeout"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Json(_)));
    }
}
