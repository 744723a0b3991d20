//! Driver failures: problems with files rather than with programs.

use std::io;
use std::path::{Path, PathBuf};

use hyper_diagnostic::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Entry point file not found: {}", entry.display())]
    MissingEntry { entry: PathBuf },
    #[error("unsupported file type '{}' (expected .hfl or .hbp)", path.display())]
    UnsupportedExtension { path: PathBuf },
}

impl DriverError {
    #[cold]
    pub fn io(path: &Path, source: io::Error) -> Self {
        DriverError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DriverError::Io { .. } => ErrorCode::E7001,
            DriverError::MissingEntry { .. } => ErrorCode::E7002,
            DriverError::UnsupportedExtension { .. } => ErrorCode::E7003,
        }
    }
}
