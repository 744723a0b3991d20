//! The `run` and `project` commands.

use std::path::Path;

use hyperc::{run_path, run_project, RunOptions, Session};

use super::finish;

/// Run a `.hfl` script or print a `.hbp` blueprint tree.
pub fn run_file(path: &str, options: RunOptions) -> i32 {
    let session = Session::stdout(options);
    finish(run_path(Path::new(path), &session))
}

/// Scan `dir` and run `entry` from it.
pub fn run_project_dir(dir: &str, entry: &str, options: RunOptions) -> i32 {
    let session = Session::stdout(options);
    finish(run_project(Path::new(dir), entry, &session))
}
