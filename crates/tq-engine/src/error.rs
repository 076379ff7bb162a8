//! Error types for the scenario engine.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for engine operations.
pub type QuestResult<T> = Result<T, QuestError>;

/// Errors that can occur while resolving, loading, or playing a scenario.
#[derive(Debug, Error)]
pub enum QuestError {
    /// A choice token contains characters outside `[A-Za-z0-9]` or is reserved.
    #[error("invalid choice token: {0:?}")]
    InvalidToken(String),

    /// A scenario name would escape the scenarios root.
    #[error("invalid scenario name: {0:?}")]
    InvalidScenarioName(String),

    /// The branch file does not exist.
    #[error("scenario file not found: {}", path.display())]
    BranchNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The branch file exists but could not be read.
    #[error("failed to load scenario file {}: {source}", path.display())]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The scenarios root could not be enumerated.
    #[error("failed to discover scenarios in {}: {source}", root.display())]
    CatalogDiscovery {
        /// Root directory that was scanned.
        root: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The session has already been ended.
    #[error("scenario session has ended")]
    SessionTerminated,
}
