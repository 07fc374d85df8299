//! Property tests for logical path normalization.

use proptest::prelude::*;

use classpack::LogicalPath;

fn raw_path() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9_./\\\\-]{0,48}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Normalizing an already-normalized path is a no-op.
    #[test]
    fn property_normalization_is_idempotent(raw in raw_path()) {
        let once = LogicalPath::new(&raw);
        let twice = LogicalPath::new(once.as_str());
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Normalized paths never carry separators at the edges or backslashes.
    #[test]
    fn property_normalized_form_is_canonical(raw in raw_path()) {
        let path = LogicalPath::new(&raw);
        let s = path.as_str();
        prop_assert!(!s.starts_with('/'));
        prop_assert!(!s.ends_with('/'));
        prop_assert!(!s.contains('\\'));
        prop_assert!(!s.contains("//"));
        prop_assert!(!s.split('/').any(|seg| seg == "."));
    }

    /// PROPERTY: Host separators and slashes name the same logical path.
    #[test]
    fn property_backslash_equals_slash(segments in proptest::collection::vec("[a-z]{1,6}", 1..5)) {
        let slashed = LogicalPath::new(segments.join("/"));
        let backslashed = LogicalPath::new(segments.join("\\"));
        prop_assert_eq!(slashed, backslashed);
    }
}
