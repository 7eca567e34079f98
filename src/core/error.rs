//! Extraction errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Any failure aborts the whole run; outputs written before it stay on disk.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Source root missing, not a directory, or unreadable
    #[error("source directory {} not found or unreadable", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    /// Descriptor is not valid JSON, or has an unusable `bytecode` shape
    #[error("failed to parse descriptor {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Listing, reading, creating, or writing failed
    #[error("I/O error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
