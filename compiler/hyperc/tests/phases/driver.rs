//! File dispatch, project discovery and exit statuses.

use std::fs;
use std::path::Path;

use hyperc::{
    discover_files, run_path, run_project, DriverError, ExitStatus, RunOptions, SourceKind,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crate::common::capture;

fn write(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn test_exit_codes() {
    assert_eq!(ExitStatus::Success.code(), 0);
    assert_eq!(ExitStatus::Usage.code(), 64);
    assert_eq!(ExitStatus::SyntaxError.code(), 65);
    assert_eq!(ExitStatus::RuntimeError.code(), 70);
    assert_eq!(ExitStatus::DriverError.code(), 74);
}

#[test]
fn test_source_kind_from_extension() {
    assert_eq!(SourceKind::from_path(Path::new("a/main.hfl")), Some(SourceKind::Flow));
    assert_eq!(SourceKind::from_path(Path::new("Main.hbp")), Some(SourceKind::Blueprint));
    assert_eq!(SourceKind::from_path(Path::new("notes.txt")), None);
    assert_eq!(SourceKind::from_path(Path::new("hfl")), None);
}

#[test]
fn test_run_path_dispatches_flow() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "main.hfl", "print \"from file\"");
    let session = capture(RunOptions::default());
    let outcome = run_path(&dir.path().join("main.hfl"), &session).unwrap();
    assert!(outcome.is_success());
    assert_eq!(session.output.get_output(), "from file\n");
}

#[test]
fn test_run_path_dispatches_blueprint() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Main.hbp", "role Admin is User\n");
    let session = capture(RunOptions::default());
    let outcome = run_path(&dir.path().join("Main.hbp"), &session).unwrap();
    assert!(outcome.is_success());
    assert_eq!(session.output.get_output(), "(role Admin is User)\n");
}

#[test]
fn test_run_path_rejects_other_extensions() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "readme.md", "print 1");
    let session = capture(RunOptions::default());
    let error = run_path(&dir.path().join("readme.md"), &session).unwrap_err();
    assert!(matches!(error, DriverError::UnsupportedExtension { .. }));
    assert_eq!(error.code(), hyper_diagnostic::ErrorCode::E7003);
    assert_eq!(session.output.get_output(), "");
}

#[test]
fn test_run_path_missing_file() {
    let dir = TempDir::new().unwrap();
    let session = capture(RunOptions::default());
    let error = run_path(&dir.path().join("absent.hfl"), &session).unwrap_err();
    assert!(matches!(error, DriverError::Io { .. }));
    assert_eq!(error.code(), hyper_diagnostic::ErrorCode::E7001);
}

#[test]
fn test_discover_files_recurses_and_sorts() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "b.hfl", "");
    write(dir.path(), "a.hbp", "");
    write(dir.path(), "lib/util.hfl", "");
    write(dir.path(), "lib/deep/x.txt", "");
    fs::create_dir_all(dir.path().join("empty")).unwrap();

    let files = discover_files(dir.path()).unwrap();
    let relative: Vec<String> = files
        .iter()
        .map(|f| {
            f.strip_prefix(dir.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    assert_eq!(relative, vec!["a.hbp", "b.hfl", "lib/deep/x.txt", "lib/util.hfl"]);
}

#[test]
fn test_project_runs_entry_point() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Main.hfl", "print 40 + 2");
    write(dir.path(), "Clock.hbp", "role Timer is Clock");
    write(dir.path(), "assets/logo.txt", "not code");

    let session = capture(RunOptions::default());
    let outcome = run_project(dir.path(), "Main.hfl", &session).unwrap();
    assert!(outcome.is_success());

    let entry = dir.path().join("Main.hfl");
    assert_eq!(
        session.output.get_output(),
        format!(
            "--- [HyperScript Engine Started] ---\n\
             Scanning directory: {}\n\
             Found 3 files.\n\
             Executing entry point: {}\n\
             42\n",
            dir.path().display(),
            entry.display()
        )
    );
}

#[test]
fn test_project_missing_entry() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Other.hfl", "print 1");
    let session = capture(RunOptions::default());
    let error = run_project(dir.path(), "Main.hbp", &session).unwrap_err();
    assert!(matches!(error, DriverError::MissingEntry { .. }));
    assert!(error.to_string().starts_with("Entry point file not found: "));
    assert!(!session.output.get_output().contains("Executing"));
}

#[test]
fn test_project_entry_statuses_propagate() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "bad.hfl", "print (");
    write(dir.path(), "boom.hfl", "print 1 / 0");

    let session = capture(RunOptions::default());
    let outcome = run_project(dir.path(), "bad.hfl", &session).unwrap();
    assert_eq!(outcome.status, ExitStatus::SyntaxError);

    let outcome = run_project(dir.path(), "boom.hfl", &session).unwrap();
    assert_eq!(outcome.status, ExitStatus::RuntimeError);
    assert_eq!(outcome.status.code(), 70);
}
