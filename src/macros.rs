/// Builds a [`FieldMap`](crate::FieldMap) from literal entries.
///
/// Bracketed values become lists; anything else becomes a scalar.
///
/// # Examples
///
/// ```rust
/// use zero_gravity::{fields, FieldValue};
///
/// let title = "Test";
/// let map = fields! {
///     "encoding": "zero-gravity",
///     "title": title,
///     "indexes": ["alpha", "beta"]
/// };
///
/// assert_eq!(map.get_str("title"), Some("Test"));
/// assert_eq!(map.get("indexes"), Some(&FieldValue::from(vec!["alpha", "beta"])));
/// ```
#[macro_export]
macro_rules! fields {
    // List value
    (@value [ $($item:expr),* $(,)? ]) => {
        $crate::FieldValue::List(vec![$($item.to_string()),*])
    };

    // Scalar value
    (@value $value:expr) => {
        $crate::FieldValue::from($value)
    };

    () => {
        $crate::FieldMap::new()
    };

    ($($key:literal : $value:tt),+ $(,)?) => {{
        let mut map = $crate::FieldMap::new();
        $(
            map.insert($key, $crate::fields!(@value $value));
        )+
        map
    }};
}

#[cfg(test)]
mod tests {
    use crate::{FieldMap, FieldValue};

    #[test]
    fn test_fields_macro_empty() {
        assert_eq!(fields!(), FieldMap::new());
    }

    #[test]
    fn test_fields_macro_order_and_shapes() {
        let map = fields! {
            "title": "T",
            "indexes": ["a", "b"],
            "tags": [],
        };

        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["title", "indexes", "tags"]);
        assert_eq!(map.get("title"), Some(&FieldValue::from("T")));
        assert_eq!(map.get("indexes"), Some(&FieldValue::from(vec!["a", "b"])));
        assert_eq!(map.get("tags"), Some(&FieldValue::List(vec![])));
    }

    #[test]
    fn test_fields_macro_owned_values() {
        let relevance = String::from("owned");
        let map = fields! { "relevance": relevance };
        assert_eq!(map.get_str("relevance"), Some("owned"));
    }
}
