//! DOCX format detection and validation.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::package::DOCUMENT_XML;

/// ZIP local-file magic: every DOCX starts with it.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// DOCX package information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxFormat {
    /// Number of entries in the archive
    pub entries: usize,
}

impl std::fmt::Display for DocxFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DOCX ({} entries)", self.entries)
    }
}

/// Validate that a path points at a usable DOCX package.
///
/// The path must exist, carry a `.docx` extension (case-insensitive),
/// start with the ZIP magic, and contain a `word/document.xml` entry.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocxFormat> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let extension_ok = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("docx"))
        .unwrap_or(false);
    if !extension_ok {
        return Err(Error::InvalidFormat(format!(
            "expected a .docx file: {}",
            path.display()
        )));
    }

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut magic = [0u8; 4];
    reader
        .read_exact(&mut magic)
        .map_err(|_| Error::InvalidFormat("file is too short to be a ZIP archive".to_string()))?;
    if magic != ZIP_MAGIC {
        return Err(Error::InvalidFormat(
            "file does not start with a ZIP header".to_string(),
        ));
    }

    let archive = ZipArchive::new(File::open(path)?)?;
    if !archive.file_names().any(|name| name == DOCUMENT_XML) {
        return Err(Error::MissingDocument);
    }

    Ok(DocxFormat {
        entries: archive.len(),
    })
}

/// Check whether a file is a usable DOCX package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}
