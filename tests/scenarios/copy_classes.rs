//! Scenario: loose classes are copied into `WEB-INF/classes`.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use classpack::domain::ports::NoopEventSink;
use classpack::{
    ArtifactCoordinates, Contributor, LocalAssembly, LocalFs, LogicalPath, PackageUseCase,
    TaskOutcome,
};
use tempfile::tempdir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn scenario_copy_mode_copies_every_file() {
    let dir = tempdir().unwrap();
    let classes = dir.path().join("classes");
    write(&classes, "a.txt", "a");
    write(&classes, "b/c.txt", "c");
    let webapp = dir.path().join("webapp");

    let mut assembly = LocalAssembly::new(&webapp, Arc::new(NoopEventSink));
    let contributors = vec![Contributor::current_build(
        ArtifactCoordinates::new("com.example", "app", "1.0"),
        classes.clone(),
    )];

    let result = PackageUseCase::new(LocalFs::new(), Arc::new(NoopEventSink))
        .execute(&mut assembly, &contributors)
        .unwrap();

    let outcome = result.outcome_of(contributors[0].id()).unwrap();
    let TaskOutcome::Copied { copy, report } = outcome else {
        panic!("expected a copy, got {:?}", outcome);
    };
    let files: Vec<&str> = copy.relative_paths.iter().map(LogicalPath::as_str).collect();
    assert_eq!(files, vec!["a.txt", "b/c.txt"]);
    assert_eq!(copy.destination.as_str(), "WEB-INF/classes");
    assert_eq!(report.written, 2);

    assert_eq!(
        fs::read_to_string(webapp.join("WEB-INF/classes/b/c.txt")).unwrap(),
        "c"
    );
    // Copies never claim registry paths.
    assert!(result.structure.is_empty());
    assert!(assembly.resources().is_empty());
}

#[test]
fn scenario_project_without_classes_is_skipped_quietly() {
    let dir = tempdir().unwrap();
    let webapp = dir.path().join("webapp");

    let mut assembly = LocalAssembly::new(&webapp, Arc::new(NoopEventSink));
    let contributors = vec![Contributor::current_build(
        ArtifactCoordinates::new("com.example", "app", "1.0"),
        dir.path().join("missing"),
    )];

    let result = PackageUseCase::new(LocalFs::new(), Arc::new(NoopEventSink))
        .execute(&mut assembly, &contributors)
        .unwrap();

    assert_eq!(result.skipped_count(), 1);
    assert_eq!(result.warning_count, 0);
    assert!(assembly.warnings().is_empty());
    assert!(webapp.join("WEB-INF/classes").is_dir());
}
