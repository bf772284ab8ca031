//! Error types for the unblank library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for unblank operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while scanning or cleaning a DOCX package.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input path does not exist.
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input is not a recognizable DOCX package.
    #[error("not a valid DOCX package: {0}")]
    InvalidFormat(String),

    /// The archive has no main content document at the conventional path.
    #[error("archive has no word/document.xml entry")]
    MissingDocument,

    /// Error reading or writing the ZIP container.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The content document is not well-formed XML.
    #[error("document.xml parse error: {0}")]
    XmlParse(String),

    /// Backup or repack I/O failure.
    #[error("write error: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingDocument;
        assert_eq!(err.to_string(), "archive has no word/document.xml entry");

        let err = Error::InvalidFormat("wrong extension".into());
        assert_eq!(err.to_string(), "not a valid DOCX package: wrong extension");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
