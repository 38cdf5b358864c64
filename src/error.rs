//! Error types for rowmatch

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while binding or reading a source
#[derive(Debug, Error)]
pub enum Error {
    /// The file name does not end in a supported extension
    #[error("unsupported file type '{path}': supported types are {supported:?}")]
    UnsupportedFileType {
        path: PathBuf,
        supported: &'static [&'static str],
    },

    /// The path does not resolve to an existing file
    #[error("file not found: '{path}'")]
    FileNotFound { path: PathBuf },

    /// The file exists but cannot be read by the current user
    #[error("permission denied: '{path}' is not readable by the current user")]
    PermissionDenied { path: PathBuf },

    /// Any other failure while opening a file
    #[error("failed to open '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failure while reading records out of an opened file
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl Error {
    /// Classify an error returned by `File::open`
    pub(crate) fn from_open(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound { path },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path },
            _ => Error::Io { path, source },
        }
    }

    /// Path of the file the error refers to
    pub fn path(&self) -> &Path {
        match self {
            Error::UnsupportedFileType { path, .. }
            | Error::FileNotFound { path }
            | Error::PermissionDenied { path }
            | Error::Io { path, .. }
            | Error::Csv { path, .. } => path,
        }
    }
}
