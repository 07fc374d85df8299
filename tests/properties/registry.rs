//! Property tests for the path registry.

use std::collections::HashMap;

use proptest::prelude::*;

use classpack::{ContributorId, LogicalPath, PathRegistry};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,3}").unwrap()
}

fn claims() -> impl Strategy<Value = Vec<(u8, String)>> {
    proptest::collection::vec(
        (0u8..4, proptest::collection::vec(segment(), 1..3).prop_map(|s| s.join("/"))),
        0..40,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Only the first claim of a path succeeds, and its owner sticks.
    #[test]
    fn property_first_claim_wins(claims in claims()) {
        let registry = PathRegistry::new();
        let mut expected: HashMap<String, ContributorId> = HashMap::new();

        for (contributor, path) in &claims {
            let id = ContributorId::new(format!("c{}", contributor));
            let accepted = registry.register(&id, &LogicalPath::new(path));

            prop_assert_eq!(accepted, !expected.contains_key(path));
            expected.entry(path.clone()).or_insert(id);
        }

        prop_assert_eq!(registry.len(), expected.len());
        for (path, owner) in &expected {
            let logical = LogicalPath::new(path);
            prop_assert!(registry.is_registered(&logical));
            let actual_owner = registry.owner(&logical);
            prop_assert_eq!(actual_owner.as_ref(), Some(owner));
        }
    }

    /// PROPERTY: The full structure is the union of every contributor's paths.
    #[test]
    fn property_structure_partitions_by_owner(claims in claims()) {
        let registry = PathRegistry::new();
        for (contributor, path) in &claims {
            registry.register(&ContributorId::new(format!("c{}", contributor)), &LogicalPath::new(path));
        }

        let mut from_owners: Vec<LogicalPath> = (0u8..4)
            .flat_map(|c| registry.paths_of(&ContributorId::new(format!("c{}", c))))
            .collect();
        from_owners.sort();

        let mut structure = registry.full_structure();
        structure.sort();
        prop_assert_eq!(from_owners, structure);
    }
}
