//! Classpack CLI - classes packaging for web-application assembly
//!
//! Usage: classpack <COMMAND>
//!
//! Commands:
//!   plan     Decide how each contributor is packaged, without writing
//!   package  Decide and execute copies/archives
//!   collect  List the files a directory would contribute

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use classpack::config::{with_env_overrides, Config};
use classpack::domain::ports::{NoopEventSink, PackageEventSink};
use classpack::infrastructure::{ConsoleEventSink, JsonEventSink, LocalAssembly, LocalFs};
use classpack::{PackageResult, PackageUseCase, SourceCollector, TaskOutcome};

/// Classpack - classes packaging for web-application assembly
#[derive(Parser, Debug)]
#[command(name = "classpack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide how each contributor is packaged, without writing
    Plan {
        /// Path to classpack.toml (defaults to <project-dir>/classpack.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Project directory
        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,

        /// Bundle classes into an archive under WEB-INF/lib
        #[arg(long)]
        archive_classes: bool,
    },

    /// Decide and execute copies/archives
    Package {
        /// Path to classpack.toml (defaults to <project-dir>/classpack.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Project directory
        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,

        /// Bundle classes into an archive under WEB-INF/lib
        #[arg(long)]
        archive_classes: bool,
    },

    /// List the files a directory would contribute
    Collect {
        /// Directory to enumerate
        dir: PathBuf,

        /// Only keep files matching this glob (repeatable)
        #[arg(long)]
        include: Vec<String>,

        /// Drop files matching this glob (repeatable)
        #[arg(long)]
        exclude: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            config,
            project_dir,
            archive_classes,
        } => cmd_run(
            config.as_deref(),
            &project_dir,
            archive_classes,
            true,
            cli.json,
            cli.verbose,
        ),
        Commands::Package {
            config,
            project_dir,
            archive_classes,
        } => cmd_run(
            config.as_deref(),
            &project_dir,
            archive_classes,
            false,
            cli.json,
            cli.verbose,
        ),
        Commands::Collect {
            dir,
            include,
            exclude,
        } => cmd_collect(&dir, &include, &exclude, cli.json),
    }
}

fn load_config(config_path: Option<&Path>, project_dir: &Path, json: bool) -> Result<Config> {
    let (config, warnings) = match config_path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            let base = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            (with_env_overrides(config.resolve_paths(base)), warnings)
        }
        None => Config::load_or_default(Some(project_dir)).with_context(|| {
            format!("failed to load configuration from {}", project_dir.display())
        })?,
    };

    if !json {
        for warning in &warnings {
            eprintln!("⚠ {}", warning);
        }
    }

    Ok(config)
}

fn cmd_run(
    config_path: Option<&Path>,
    project_dir: &Path,
    archive_classes: bool,
    dry_run: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let mut config = load_config(config_path, project_dir, json)?;
    if archive_classes {
        config.assembly.archive_classes = true;
    }

    let events: Arc<dyn PackageEventSink> = if json && !dry_run {
        Arc::new(JsonEventSink::stdout())
    } else if json {
        Arc::new(NoopEventSink)
    } else {
        Arc::new(ConsoleEventSink::stderr(verbose > 0 || dry_run))
    };

    let mut assembly = LocalAssembly::new(config.assembly.webapp_directory.clone(), events.clone())
        .with_archive_classes(config.assembly.archive_classes)
        .with_final_name(config.final_name())
        .with_archiver(config.archiver())
        .with_dry_run(dry_run);

    let result = PackageUseCase::new(LocalFs::new(), events)
        .execute(&mut assembly, &config.contributors())
        .with_context(|| {
            format!(
                "packaging into {} failed",
                config.assembly.webapp_directory.display()
            )
        })?;

    if dry_run {
        print_plan(&result, json)?;
    } else if !json {
        print_resources(&result);
    }

    Ok(())
}

fn print_plan(result: &PackageResult, json: bool) -> Result<()> {
    for (contributor, outcome) in &result.outcomes {
        if json {
            let value = match outcome {
                TaskOutcome::Skipped(reason) => serde_json::json!({
                    "event": "decision",
                    "contributor": contributor,
                    "action": "skip",
                    "reason": reason.to_string(),
                    "warning": reason.warning(),
                }),
                TaskOutcome::Copied { copy, .. } => serde_json::json!({
                    "event": "decision",
                    "contributor": contributor,
                    "action": "copy",
                    "source": copy.source_dir.display().to_string(),
                    "destination": copy.destination,
                    "files": copy.relative_paths,
                }),
                TaskOutcome::Archived(archive) => serde_json::json!({
                    "event": "decision",
                    "contributor": contributor,
                    "action": "archive",
                    "source": archive.source_dir.display().to_string(),
                    "target": archive.target,
                }),
            };
            println!("{}", serde_json::to_string(&value)?);
        } else {
            match outcome {
                TaskOutcome::Skipped(reason) => println!("{}: skip ({})", contributor, reason),
                TaskOutcome::Copied { copy, .. } => {
                    println!(
                        "{}: copy {} file(s) -> {}",
                        contributor,
                        copy.len(),
                        copy.destination
                    );
                    for path in &copy.relative_paths {
                        println!("    {}", path);
                    }
                }
                TaskOutcome::Archived(archive) => {
                    println!("{}: archive -> {}", contributor, archive.target)
                }
            }
        }
    }
    Ok(())
}

fn print_resources(result: &PackageResult) {
    for resource in &result.resources {
        println!("{}", resource);
    }
}

fn cmd_collect(dir: &Path, include: &[String], exclude: &[String], json: bool) -> Result<()> {
    let fs = LocalFs::new();
    let includes = (!include.is_empty()).then_some(include);
    let excludes = (!exclude.is_empty()).then_some(exclude);

    let paths = SourceCollector::new(&fs)
        .collect(dir, includes, excludes)
        .with_context(|| format!("failed to collect {}", dir.display()))?;

    if json {
        let output = serde_json::json!({
            "event": "collect",
            "root": dir.display().to_string(),
            "count": paths.len(),
            "paths": paths,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        for path in &paths {
            println!("{}", path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_plan() {
        let cli = Cli::try_parse_from(["classpack", "plan"]).unwrap();
        if let Commands::Plan {
            config,
            project_dir,
            archive_classes,
        } = cli.command
        {
            assert!(config.is_none());
            assert_eq!(project_dir, PathBuf::from("."));
            assert!(!archive_classes);
        } else {
            panic!("Expected Plan command");
        }
    }

    #[test]
    fn test_cli_parse_package_with_args() {
        let cli = Cli::try_parse_from([
            "classpack",
            "package",
            "--config",
            "build/classpack.toml",
            "--archive-classes",
        ])
        .unwrap();

        if let Commands::Package {
            config,
            archive_classes,
            ..
        } = cli.command
        {
            assert_eq!(config, Some(PathBuf::from("build/classpack.toml")));
            assert!(archive_classes);
        } else {
            panic!("Expected Package command");
        }
    }

    #[test]
    fn test_cli_parse_collect_patterns() {
        let cli = Cli::try_parse_from([
            "classpack",
            "collect",
            "target/classes",
            "--include",
            "*.class",
            "--include",
            "*.properties",
            "--exclude",
            "META-INF/",
        ])
        .unwrap();

        if let Commands::Collect {
            dir,
            include,
            exclude,
        } = cli.command
        {
            assert_eq!(dir, PathBuf::from("target/classes"));
            assert_eq!(include, vec!["*.class", "*.properties"]);
            assert_eq!(exclude, vec!["META-INF/"]);
        } else {
            panic!("Expected Collect command");
        }
    }

    #[test]
    fn test_cli_json_flag() {
        let cli = Cli::try_parse_from(["classpack", "--json", "plan"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["classpack", "-vv", "package"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
