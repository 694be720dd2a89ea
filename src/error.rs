//! Error types for tspsuite-ingest

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Ingestion error types
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a file or resolving a filesystem path failed.
    ///
    /// Fatal for the affected file; the remaining traversal is aborted
    /// rather than silently dropping a partially read run.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path the failing operation was applied to
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The configured ingestion root does not denote a directory.
    #[error("ingestion root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A run log opened a run while no instance-runs scope was live.
    ///
    /// Raised by the model when a section marker is found in a file that
    /// cannot be attributed to any benchmark instance.
    #[error("run log {} is not inside any recognized instance directory", .path.display())]
    OrphanRunLog {
        /// The unattributable run-log file
        path: PathBuf,
    },

    /// JSON export of the experiment store failed.
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
}
