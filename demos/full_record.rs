//! Turn a generation-service reply into a full record with an embedding.
//!
//! Run with: cargo run --example full_record

use std::error::Error;
use zero_gravity::{
    build_full_json, embed_fields, fields_from_json_str, fields_to_embedding_text,
    EmbeddingProvider, Result,
};

/// Stand-in for a real embedding service.
struct CharacterHistogram;

impl EmbeddingProvider for CharacterHistogram {
    fn model(&self) -> &str {
        "char-histogram"
    }

    fn embed(&self, text: &str, dimensions: usize) -> Result<Vec<f32>> {
        let mut vector = vec![0.0; dimensions];
        for byte in text.bytes() {
            vector[usize::from(byte) % dimensions] += 1.0;
        }
        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt().max(1.0);
        Ok(vector.into_iter().map(|v| v / norm).collect())
    }
}

const REPLY: &str = r#"{
  "id": "extents",
  "title": "Extents",
  "intent": "proposal",
  "stance": "prescriptive",
  "relevance": "For engineers working on the page allocator",
  "claims": ["Pages are 8 KiB", "Extents group eight pages", "Free space is tracked per extent"],
  "tags": ["storage", "allocator"]
}"#;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let fields = fields_from_json_str(REPLY)?;
    println!("Canonical text:\n{}\n", fields_to_embedding_text(&fields));

    let embedding = embed_fields(&fields, &CharacterHistogram, 8)?;
    let record = build_full_json(&fields, Some(embedding));

    let validation = record.validate();
    println!("Valid: {} {:?}\n", validation.valid, validation.errors);
    println!("{}", record.to_json_string_pretty()?);

    Ok(())
}
