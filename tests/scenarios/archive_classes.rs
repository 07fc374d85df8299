//! Scenario: classes are bundled into one archive under `WEB-INF/lib`.

use std::fs;
use std::sync::Arc;

use classpack::domain::ports::NoopEventSink;
use classpack::{
    ArtifactCoordinates, Contributor, ContributorId, LocalAssembly, LocalFs, LogicalPath,
    PackageUseCase, PathRegistry, SkipReason, TaskOutcome,
};
use tempfile::tempdir;

fn project(classes: std::path::PathBuf) -> Contributor {
    Contributor::current_build(ArtifactCoordinates::new("com.example", "app", "1.0"), classes)
}

#[cfg(unix)]
#[test]
fn scenario_archive_mode_claims_and_writes_archive() {
    use classpack::infrastructure::CommandArchiver;

    let dir = tempdir().unwrap();
    let classes = dir.path().join("classes");
    fs::create_dir_all(&classes).unwrap();
    fs::write(classes.join("A.class"), "a").unwrap();
    let webapp = dir.path().join("webapp");

    let mut assembly = LocalAssembly::new(&webapp, Arc::new(NoopEventSink))
        .with_archive_classes(true)
        .with_archiver(CommandArchiver::new(vec![
            "touch".to_string(),
            "{archive}".to_string(),
        ]));
    let contributors = vec![project(classes.clone())];

    let result = PackageUseCase::new(LocalFs::new(), Arc::new(NoopEventSink))
        .execute(&mut assembly, &contributors)
        .unwrap();

    let target = LogicalPath::new("WEB-INF/lib/app-1.0.jar");
    match result.outcome_of(&ContributorId::current_build()) {
        Some(TaskOutcome::Archived(archive)) => {
            assert_eq!(archive.source_dir, classes);
            assert_eq!(archive.target, target);
        }
        other => panic!("expected an archive, got {:?}", other),
    }
    assert_eq!(assembly.resources(), &[target.clone()]);
    assert_eq!(result.structure, vec![target]);
    assert!(webapp.join("WEB-INF/lib/app-1.0.jar").is_file());
}

#[test]
fn scenario_archive_already_registered_warns_and_skips() {
    let dir = tempdir().unwrap();
    let classes = dir.path().join("classes");
    fs::create_dir_all(&classes).unwrap();
    fs::write(classes.join("A.class"), "a").unwrap();

    let target = LogicalPath::new("WEB-INF/lib/app-1.0.jar");
    let registry = PathRegistry::new();
    let other = ContributorId::new("dependencies");
    assert!(registry.register(&other, &target));

    let mut assembly = LocalAssembly::new(dir.path().join("webapp"), Arc::new(NoopEventSink))
        .with_archive_classes(true)
        .with_dry_run(true);

    let result = PackageUseCase::new(LocalFs::new(), Arc::new(NoopEventSink))
        .execute_with_registry(&mut assembly, &[project(classes)], &registry)
        .unwrap();

    match result.outcome_of(&ContributorId::current_build()) {
        Some(TaskOutcome::Skipped(SkipReason::AlreadyRegistered { path, owner })) => {
            assert_eq!(path, &target);
            assert_eq!(owner.as_ref(), Some(&other));
        }
        other => panic!("expected a skip, got {:?}", other),
    }
    assert_eq!(
        assembly.warnings(),
        &["Could not generate archive classes file [WEB-INF/lib/app-1.0.jar] has already been copied.".to_string()]
    );
    assert!(assembly.resources().is_empty());
    assert_eq!(registry.owner(&target), Some(other));
}

#[test]
fn scenario_two_contributors_same_archive_name_one_wins() {
    let dir = tempdir().unwrap();
    for name in ["project", "overlay"] {
        let classes = dir.path().join(name);
        fs::create_dir_all(&classes).unwrap();
        fs::write(classes.join("A.class"), name).unwrap();
    }

    let overlay = Contributor::new(
        ContributorId::new("overlay"),
        ArtifactCoordinates::new("com.example", "app", "1.0"),
        dir.path().join("overlay"),
    );
    let contributors = vec![project(dir.path().join("project")), overlay];

    let mut assembly = LocalAssembly::new(dir.path().join("webapp"), Arc::new(NoopEventSink))
        .with_archive_classes(true)
        .with_dry_run(true);

    let result = PackageUseCase::new(LocalFs::new(), Arc::new(NoopEventSink))
        .execute(&mut assembly, &contributors)
        .unwrap();

    assert_eq!(result.archive_count(), 1);
    assert_eq!(result.skipped_count(), 1);
    assert_eq!(result.warning_count, 1);
    assert!(matches!(
        result.outcome_of(&ContributorId::new("overlay")),
        Some(TaskOutcome::Skipped(SkipReason::AlreadyRegistered { .. }))
    ));
}
