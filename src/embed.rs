//! Seam for the external embedding service.
//!
//! The crate ships no provider. An [`EmbeddingProvider`] turns canonical text
//! into a vector; [`embed_fields`] builds that text, calls the provider and
//! packages the result as an [`EmbeddingDescriptor`] keyed by the content hash.
//!
//! Providers backed by an async client can block on their runtime inside
//! [`EmbeddingProvider::embed`]; nothing in this crate holds state across the
//! call.

use crate::{fields_to_embedding_text, EmbeddingDescriptor, Error, FieldMap, Result};
use tracing::debug;

/// A text-embedding backend.
pub trait EmbeddingProvider {
    /// Model identifier recorded in the descriptor.
    fn model(&self) -> &str;

    /// Embeds `text` into a vector of `dimensions` floats.
    ///
    /// # Errors
    ///
    /// Implementations report transport or service failures as
    /// [`Error::Provider`].
    fn embed(&self, text: &str, dimensions: usize) -> Result<Vec<f32>>;
}

/// Embeds the canonical text of `fields`.
///
/// # Errors
///
/// Propagates provider errors, and returns [`Error::Provider`] if the
/// returned vector does not have `dimensions` values.
///
/// # Examples
///
/// ```rust
/// use zero_gravity::{embed_fields, fields_hash, EmbeddingProvider, FieldMap, Result};
///
/// struct Zeros;
///
/// impl EmbeddingProvider for Zeros {
///     fn model(&self) -> &str {
///         "zeros"
///     }
///
///     fn embed(&self, _text: &str, dimensions: usize) -> Result<Vec<f32>> {
///         Ok(vec![0.0; dimensions])
///     }
/// }
///
/// let mut fields = FieldMap::new();
/// fields.insert("title", "Notes");
///
/// let embedding = embed_fields(&fields, &Zeros, 4).unwrap();
/// assert_eq!(embedding.dimensions, 4);
/// assert_eq!(embedding.input_hash, fields_hash(&fields));
/// ```
pub fn embed_fields<P>(fields: &FieldMap, provider: &P, dimensions: usize) -> Result<EmbeddingDescriptor>
where
    P: EmbeddingProvider + ?Sized,
{
    let text = fields_to_embedding_text(fields);
    debug!(model = provider.model(), dimensions, "requesting embedding");

    let vector = provider.embed(&text, dimensions)?;
    if vector.len() != dimensions {
        return Err(Error::provider(
            provider.model(),
            format!("returned {} values, expected {dimensions}", vector.len()),
        ));
    }

    Ok(EmbeddingDescriptor::new(provider.model(), &text, vector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recording {
        seen: RefCell<Vec<String>>,
        len: Option<usize>,
    }

    impl EmbeddingProvider for Recording {
        fn model(&self) -> &str {
            "recording"
        }

        fn embed(&self, text: &str, dimensions: usize) -> Result<Vec<f32>> {
            self.seen.borrow_mut().push(text.to_string());
            Ok(vec![1.0; self.len.unwrap_or(dimensions)])
        }
    }

    struct Failing;

    impl EmbeddingProvider for Failing {
        fn model(&self) -> &str {
            "failing"
        }

        fn embed(&self, _text: &str, _dimensions: usize) -> Result<Vec<f32>> {
            Err(Error::provider(self.model(), "connection refused"))
        }
    }

    fn fields() -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("intent", "report");
        fields.insert("title", "Quarterly");
        fields
    }

    #[test]
    fn test_provider_sees_canonical_text() {
        let provider = Recording {
            seen: RefCell::new(Vec::new()),
            len: None,
        };
        let embedding = embed_fields(&fields(), &provider, 3).unwrap();
        assert_eq!(
            provider.seen.borrow().as_slice(),
            ["Title: Quarterly\nIntent: report".to_string()]
        );
        assert_eq!(embedding.model, "recording");
        assert!(embedding.check_shape().is_ok());
        assert!(embedding.matches_fields(&fields()));
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let provider = Recording {
            seen: RefCell::new(Vec::new()),
            len: Some(2),
        };
        let err = embed_fields(&fields(), &provider, 3).unwrap_err();
        assert!(matches!(err, Error::Provider { .. }));
    }

    #[test]
    fn test_provider_error_propagates() {
        let err = embed_fields(&fields(), &Failing, 3).unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_dyn_provider() {
        let provider: Box<dyn EmbeddingProvider> = Box::new(Failing);
        assert!(embed_fields(&fields(), provider.as_ref(), 1).is_err());
    }
}
