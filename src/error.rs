use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for manifest generation operations
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Failed to write the generated manifest to disk
    #[error("Failed to write manifest {file}: {source}")]
    ManifestWrite {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the manifest to JSON
    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ManifestError {
    /// Create a ManifestWrite error from a file path and IO error
    pub fn manifest_write(file: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ManifestWrite {
            file: file.into(),
            source,
        }
    }
}

/// Result type alias for ManifestError
pub type Result<T> = std::result::Result<T, ManifestError>;
