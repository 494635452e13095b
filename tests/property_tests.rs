//! Property-based tests for the two laws the format relies on:
//!
//! - rendering then reparsing a parsed stamp gives back the same fields
//! - canonical text (and so its hash) does not depend on key order

use proptest::prelude::*;
use zero_gravity::{
    extract, fields_hash, fields_to_embedding_text, format_stamp, parse, parse_stamp, FieldMap,
    FieldValue,
};

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.,:;!?'\"é-]{0,24}"
}

fn field_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        text().prop_map(FieldValue::Scalar),
        prop::collection::vec(text(), 1..5).prop_map(FieldValue::List),
    ]
}

/// Field maps in the shape the parser produces for stamp blocks.
fn stamp_fields() -> impl Strategy<Value = FieldMap> {
    (
        proptest::option::of(field_value()),
        proptest::option::of(field_value()),
        proptest::option::of(field_value()),
        proptest::option::of(field_value()),
        proptest::option::of(field_value()),
    )
        .prop_map(|(encoding, version, title, intent, indexes)| {
            let mut fields = FieldMap::new();
            let entries = [
                ("encoding", encoding),
                ("version", version),
                ("title", title),
                ("intent", intent),
                ("indexes", indexes),
            ];
            for (key, value) in entries {
                if let Some(value) = value {
                    fields.insert(key, value);
                }
            }
            fields
        })
}

fn canonical_entries() -> impl Strategy<Value = Vec<(String, FieldValue)>> {
    let keys = [
        "title", "intent", "relevance", "indexes", "claims", "tags", "relations", "id", "stance",
    ];
    prop::collection::vec(field_value(), keys.len()).prop_map(move |values| {
        keys.iter()
            .map(|k| k.to_string())
            .zip(values)
            .collect::<Vec<_>>()
    })
}

proptest! {
    #[test]
    fn prop_format_then_parse_round_trips(fields in stamp_fields()) {
        let text = format_stamp(&fields);
        prop_assert_eq!(parse_stamp(&text), Some(fields));
    }

    #[test]
    fn prop_reparse_is_stable(fields in stamp_fields()) {
        let once = parse(extract(&format_stamp(&fields)).unwrap().body);
        let twice = parse(extract(&format_stamp(&once)).unwrap().body);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_canonical_text_ignores_key_order(
        (entries, shuffled) in canonical_entries()
            .prop_flat_map(|entries| (Just(entries.clone()), Just(entries).prop_shuffle()))
    ) {
        let forward: FieldMap = entries.into_iter().collect();
        let mixed: FieldMap = shuffled.into_iter().collect();
        prop_assert_eq!(fields_to_embedding_text(&forward), fields_to_embedding_text(&mixed));
        prop_assert_eq!(fields_hash(&forward), fields_hash(&mixed));
    }

    #[test]
    fn prop_parse_never_panics(body in "[\\PC\n]{0,200}") {
        let fields = parse(&body);
        // A stored list is never empty.
        for (_, value) in &fields {
            if let FieldValue::List(items) = value {
                prop_assert!(!items.is_empty());
            }
        }
    }

    #[test]
    fn prop_extract_without_end_is_none(prefix in "[a-z \n]{0,40}", body in "[a-z: \n]{0,40}") {
        let doc = format!("{prefix}\n---BEGIN ZERO GRAVITY---\n{body}");
        prop_assert!(extract(&doc).is_none());
    }
}
