//! Project runs: find every file under a directory, then run one entry file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::pipeline::{run_path, RunOutcome};
use crate::{DriverError, Session};

/// Every regular file under `dir`, recursively, sorted by path.
pub fn discover_files(dir: &Path) -> Result<Vec<PathBuf>, DriverError> {
    let mut files = Vec::new();
    discover_recursive(dir, &mut files)?;
    files.sort();
    debug!(dir = %dir.display(), count = files.len(), "discovered files");
    Ok(files)
}

fn discover_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), DriverError> {
    let entries = fs::read_dir(dir).map_err(|e| DriverError::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| DriverError::io(dir, e))?.path();
        if path.is_dir() {
            discover_recursive(&path, files)?;
        } else if path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

/// Scan `dir`, report what was found, and run `dir/entry`.
///
/// The entry must be one of the discovered regular files; a directory or a
/// path outside the scan is a [`DriverError::MissingEntry`].
pub fn run_project(dir: &Path, entry: &str, session: &Session) -> Result<RunOutcome, DriverError> {
    let out = &session.output;
    out.println("--- [HyperScript Engine Started] ---");
    out.println(&format!("Scanning directory: {}", dir.display()));

    let files = discover_files(dir)?;
    out.println(&format!("Found {} files.", files.len()));

    let entry_path = dir.join(entry);
    if !files.contains(&entry_path) {
        return Err(DriverError::MissingEntry { entry: entry_path });
    }

    out.println(&format!("Executing entry point: {}", entry_path.display()));
    info!(entry = %entry_path.display(), "project entry");
    run_path(&entry_path, session)
}
