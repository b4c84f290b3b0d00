//! Error types for loading capture files

use std::path::PathBuf;
use thiserror::Error;

/// Setup errors that stop a run. Malformed lines inside a log are never
/// reported here.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("data directory not found: {}", .0.display())]
    DataDirMissing(PathBuf),
}
