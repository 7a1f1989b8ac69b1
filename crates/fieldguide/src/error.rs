//! Error handling for fieldguide

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while wiring the extension into a host or while
/// writing build outputs.
#[derive(Error, Debug)]
pub enum Error {
    /// The host application handle was not supplied.
    #[error("a host application must be provided")]
    MissingApplication,

    /// A bundled asset could not be copied into the output tree.
    #[error("failed to copy asset '{name}' to {path}: {source}")]
    AssetCopy {
        /// File name of the asset.
        name: String,
        /// Destination path of the failed copy.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A generated page could not be written.
    #[error("failed to write page {path}: {source}")]
    PageWrite {
        /// Destination path of the page.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Any other file system failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fieldguide operations.
pub type Result<T> = std::result::Result<T, Error>;

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_application_display() {
        let err = Error::MissingApplication;
        assert_eq!(err.to_string(), "a host application must be provided");
    }

    #[test]
    fn test_asset_copy_display() {
        let err = Error::AssetCopy {
            name: "fieldguide.css".to_string(),
            path: PathBuf::from("/out/_static/fieldguide.css"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("fieldguide.css"));
        assert!(msg.contains("/out/_static/fieldguide.css"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
