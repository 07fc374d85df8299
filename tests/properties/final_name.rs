//! Property tests for final name rendering.

use proptest::prelude::*;

use classpack::{ArtifactCoordinates, FinalNameTemplate};

fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9_.-]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rendering never panics, and any name it returns is a plain file name.
    #[test]
    fn property_render_yields_plain_file_name(
        template in "[a-zA-Z@{}./-]{0,40}",
        artifact in word(),
        version in word(),
    ) {
        let coords = ArtifactCoordinates::new("g", artifact, version);
        if let Ok(name) = FinalNameTemplate::new(template).render(&coords) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('/'));
            prop_assert!(name != "." && name != "..");
        }
    }

    /// PROPERTY: The default template is `<artifact>-<version>[-<classifier>].jar`.
    #[test]
    fn property_default_template_shape(
        artifact in "[a-z]{1,8}",
        version in "[0-9]{1,2}\\.[0-9]{1,2}",
        classifier in proptest::option::of("[a-z]{1,6}"),
    ) {
        let mut coords = ArtifactCoordinates::new("g", artifact.clone(), version.clone());
        if let Some(c) = &classifier {
            coords = coords.with_classifier(c.clone());
        }

        let name = FinalNameTemplate::default().render(&coords).unwrap();
        let expected = match classifier {
            Some(c) => format!("{}-{}-{}.jar", artifact, version, c),
            None => format!("{}-{}.jar", artifact, version),
        };
        prop_assert_eq!(name, expected);
    }
}
