//! Reusable configuration fixtures.

/// Project `app` 1.0 with classes in `target/classes`, webapp in `target/app`.
pub const PROJECT_CONFIG: &str = r#"
[project]
group_id = "com.example"
artifact_id = "app"
version = "1.0"
classes_directory = "target/classes"

[assembly]
webapp_directory = "target/app"
"#;

/// Archive mode with an archiver that only creates an empty file.
pub const ARCHIVE_CONFIG: &str = r#"
[project]
group_id = "com.example"
artifact_id = "app"
version = "1.0"
classes_directory = "target/classes"

[assembly]
webapp_directory = "target/app"
archive_classes = true

[archive]
command = ["touch", "{archive}"]
"#;

/// Overlay block whose archive name collides with the project's.
pub const COLLIDING_OVERLAY: &str = r#"
[[overlays]]
id = "legacy"
group_id = "com.example"
artifact_id = "app"
version = "1.0"
classes_directory = "legacy/classes"
"#;

/// Overlay block with its own archive name.
pub const SHARED_OVERLAY: &str = r#"
[[overlays]]
id = "shared"
group_id = "com.example"
artifact_id = "shared"
version = "2.0"
classes_directory = "shared/classes"
"#;
