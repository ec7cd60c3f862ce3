//! Error types for property loading and storing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a property list.
///
/// Entries parsed before the failure stay in the store.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source stream could not be read.
    #[error("failed to read properties: {0}")]
    Io(#[from] io::Error),

    /// The source file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A `\uXXXX` escape was truncated or contained a non-hex digit.
    #[error("malformed \\uxxxx encoding on line {line}")]
    MalformedEscape { line: usize },
}

/// Errors raised while writing a property list.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The destination stream could not be written.
    #[error("failed to write properties: {0}")]
    Io(#[from] io::Error),

    /// The parent directory of the target file could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The target file could not be created or truncated.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Either side of a property round trip.
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// Reading failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Writing failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_escape_names_the_line() {
        let err = LoadError::MalformedEscape { line: 7 };
        assert_eq!(err.to_string(), "malformed \\uxxxx encoding on line 7");
    }

    #[test]
    fn io_errors_convert() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: StoreError = io_err.into();
        assert!(matches!(err, StoreError::Io(_)));

        let err: PropertiesError = err.into();
        assert!(matches!(err, PropertiesError::Store(StoreError::Io(_))));
    }

    #[test]
    fn create_dir_display_includes_path() {
        let err = StoreError::CreateDir {
            path: PathBuf::from("/nope/conf"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to create directory /nope/conf: denied");
    }
}
